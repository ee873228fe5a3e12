pub mod filter;
pub mod listing;
pub mod summary;

pub use filter::{apply, PropertyFilter};
pub use listing::{Listing, ProjectStatus};
pub use summary::{format_price_inr, summarize};
