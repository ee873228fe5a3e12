use std::fmt;

/// Errors originating from routing or the response layers. Inventory load
/// failures have their own type (`inventory::LoadError`) because they are
/// fatal at startup; everything here is per-request.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    XlsxError(String),
    InternalError,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::XlsxError(msg) => write!(f, "Spreadsheet Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
