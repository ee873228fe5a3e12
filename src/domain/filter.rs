use crate::domain::listing::{Listing, ProjectStatus};
use serde_json::{Map, Value};

/// Structured form of a parsed query. Absent field = unconstrained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    pub city: Option<String>,
    pub bhk: Option<i64>,
    pub price_min_inr: Option<i64>,
    pub price_max_inr: Option<i64>,
    pub status: Option<ProjectStatus>,
    // Lower-cased substring matched against the project name.
    pub project_name: Option<String>,
}

impl PropertyFilter {
    pub fn is_empty(&self) -> bool {
        self.city.is_none()
            && self.bhk.is_none()
            && self.price_min_inr.is_none()
            && self.price_max_inr.is_none()
            && self.status.is_none()
            && self.project_name.is_none()
    }

    /// All predicates ANDed. A listing with no price fails any query that
    /// sets a price bound.
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(city) = &self.city {
            if !listing.city.eq_ignore_ascii_case(city) {
                return false;
            }
        }

        if let Some(bhk) = self.bhk {
            if listing.bhk != Some(bhk) {
                return false;
            }
        }

        if let Some(status) = &self.status {
            if listing.status != *status {
                return false;
            }
        }

        if self.price_min_inr.is_some() || self.price_max_inr.is_some() {
            let price = match listing.price_inr {
                Some(p) => p,
                None => return false,
            };
            if let Some(min) = self.price_min_inr {
                if price < min {
                    return false;
                }
            }
            if let Some(max) = self.price_max_inr {
                if price > max {
                    return false;
                }
            }
        }

        if let Some(needle) = &self.project_name {
            if !listing.name.to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }

        true
    }

    /// The applied filter as a key/value mapping, shown to the user so they
    /// can see exactly what was understood. Only present fields appear.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        if let Some(city) = &self.city {
            map.insert("city".into(), Value::String(city.clone()));
        }
        if let Some(bhk) = self.bhk {
            map.insert("bhk".into(), Value::from(bhk));
        }
        if let Some(min) = self.price_min_inr {
            map.insert("price_min_inr".into(), Value::from(min));
        }
        if let Some(max) = self.price_max_inr {
            map.insert("price_max_inr".into(), Value::from(max));
        }
        if let Some(status) = &self.status {
            map.insert("status".into(), Value::String(status.code().to_string()));
        }
        if let Some(name) = &self.project_name {
            map.insert("project_name".into(), Value::String(name.clone()));
        }
        Value::Object(map)
    }
}

/// Conjunctive filtering over the inventory. Original order is preserved;
/// no ranking or reordering of any kind.
pub fn apply(listings: &[Listing], filter: &PropertyFilter) -> Vec<Listing> {
    listings
        .iter()
        .filter(|listing| filter.matches(listing))
        .cloned()
        .collect()
}
