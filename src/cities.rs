/// Supported cities: (opaque source id, display name).
///
/// The source CSVs carry cuid-style city identifiers; everything the UI shows
/// comes from this table. An id that isn't listed here renders as "Unknown"
/// but the listing is kept.
pub const SUPPORTED_CITIES: &[(&str, &str)] = &[
    ("cmf50r5a00000vcj0k1iuocuu", "Mumbai"),
    ("cmf50r5a00002vcj0wq9ffxyk", "Pune"),
];

pub const UNKNOWN_CITY: &str = "Unknown";

/// Resolve a raw city id from the address table to its display name.
pub fn city_display_name(source_id: &str) -> &'static str {
    SUPPORTED_CITIES
        .iter()
        .find(|(id, _)| *id == source_id)
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN_CITY)
}
