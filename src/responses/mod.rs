pub mod html;
pub mod xlsx;

use crate::errors::ServerError;
use astra::Response;

// Type alias used by every route handler.
pub type ResultResp = Result<Response, ServerError>;

pub use html::html_response;
pub use xlsx::xlsx_response;
