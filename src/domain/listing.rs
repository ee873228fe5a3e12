/// Project lifecycle status as it appears in the source data.
///
/// Only the two statuses below are queryable; anything else the source
/// emits is carried through as `Other` so it still displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectStatus {
    ReadyToMove,
    UnderConstruction,
    Other(String),
}

impl ProjectStatus {
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "READY_TO_MOVE" => ProjectStatus::ReadyToMove,
            "UNDER_CONSTRUCTION" => ProjectStatus::UnderConstruction,
            other => ProjectStatus::Other(other.to_string()),
        }
    }

    /// Machine code, e.g. "READY_TO_MOVE". Used in the applied-filter mapping.
    pub fn code(&self) -> &str {
        match self {
            ProjectStatus::ReadyToMove => "READY_TO_MOVE",
            ProjectStatus::UnderConstruction => "UNDER_CONSTRUCTION",
            ProjectStatus::Other(raw) => raw,
        }
    }

    /// Human form, e.g. "Ready To Move".
    pub fn display(&self) -> String {
        self.code()
            .split('_')
            .filter(|w| !w.is_empty())
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(first) => {
                        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                    }
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One flattened, priced, BHK-specific unit of a project. The atomic unit of
/// search and display, produced by the inventory join.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub name: String,
    pub slug: String,
    pub status: ProjectStatus,

    // Display name from the supported-cities table, "Unknown" when the
    // address row is missing or carries an unmapped id.
    pub city: String,
    pub locality: Option<String>,

    pub bhk_label: String,
    pub bhk: Option<i64>,

    // None = price unknown; such listings never match price-bounded queries.
    pub price_inr: Option<i64>,
}
