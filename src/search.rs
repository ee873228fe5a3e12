use crate::domain::{apply, summarize, Listing, PropertyFilter};
use crate::inventory::Inventory;
use crate::query;

/// Everything a caller gets back for one query: what we understood (the
/// filter, inspectable verbatim), what matched, and the sentence explaining
/// both.
pub struct QueryOutcome {
    pub summary: String,
    pub results: Vec<Listing>,
    pub filter: PropertyFilter,
}

/// Owns the immutable inventory and answers free-text queries against it.
/// Cheap to share behind an `Arc`; queries take `&self` and nothing here
/// ever mutates after construction.
pub struct SearchEngine {
    inventory: Inventory,
}

impl SearchEngine {
    pub fn new(inventory: Inventory) -> Self {
        Self { inventory }
    }

    pub fn total_listings(&self) -> usize {
        self.inventory.total()
    }

    pub fn listings(&self) -> &[Listing] {
        &self.inventory.listings
    }

    /// All listings of one project, for the detail page.
    pub fn listings_for_slug(&self, slug: &str) -> Vec<Listing> {
        self.inventory
            .listings
            .iter()
            .filter(|l| l.slug == slug)
            .cloned()
            .collect()
    }

    /// Parse, filter, summarize. Infallible for any input text: a query the
    /// parser cannot read degrades to "show everything".
    pub fn process_query(&self, text: &str) -> QueryOutcome {
        let filter = query::parse(text);
        let results = apply(&self.inventory.listings, &filter);
        let summary = summarize(&filter, results.len());
        QueryOutcome {
            summary,
            results,
            filter,
        }
    }
}
