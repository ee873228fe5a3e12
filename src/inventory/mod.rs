mod load_error;
mod loader;
mod records;

pub use load_error::LoadError;
pub use loader::load_inventory;

use crate::domain::Listing;

/// The full joined set of listings for one process lifetime. Built once at
/// startup, never mutated afterwards, shared read-only across workers.
#[derive(Debug)]
pub struct Inventory {
    pub listings: Vec<Listing>,
}

impl Inventory {
    pub fn total(&self) -> usize {
        self.listings.len()
    }
}
