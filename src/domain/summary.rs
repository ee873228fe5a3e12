use crate::domain::filter::PropertyFilter;
use crate::domain::listing::ProjectStatus;

/// Display form for a rupee amount: crores at or above ₹1 Cr, lakhs below.
pub fn format_price_inr(price: i64) -> String {
    if price >= 10_000_000 {
        format!("₹{:.2} Cr", price as f64 / 10_000_000.0)
    } else {
        format!("₹{:.2} L", price as f64 / 100_000.0)
    }
}

fn price_phrase(filter: &PropertyFilter) -> Option<String> {
    match (filter.price_min_inr, filter.price_max_inr) {
        (Some(min), Some(max)) => Some(format!(
            "between {} and {}",
            format_price_inr(min),
            format_price_inr(max)
        )),
        (None, Some(max)) => Some(format!("under {}", format_price_inr(max))),
        (Some(min), None) => Some(format!("above {}", format_price_inr(min))),
        (None, None) => None,
    }
}

/// One short sentence describing the result, enumerating exactly the fields
/// present in the filter. Zero results get a distinct sentence that echoes
/// what was understood, so a misread query is visible to the user.
pub fn summarize(filter: &PropertyFilter, result_count: usize) -> String {
    if result_count == 0 {
        let mut text = String::from("No properties found matching your criteria.");
        let criteria = describe_criteria(filter);
        if !criteria.is_empty() {
            text.push_str(" You asked for: ");
            text.push_str(&criteria.join(", "));
            text.push('.');
        }
        return text;
    }

    let mut text = format!("Found {result_count} ");

    if let Some(bhk) = filter.bhk {
        text.push_str(&format!("{bhk}BHK "));
    }
    match &filter.status {
        Some(ProjectStatus::ReadyToMove) => text.push_str("ready-to-move "),
        Some(ProjectStatus::UnderConstruction) => text.push_str("under-construction "),
        _ => {}
    }
    text.push_str(if result_count == 1 {
        "property"
    } else {
        "properties"
    });

    if let Some(city) = &filter.city {
        text.push_str(&format!(" in {city}"));
    }
    if let Some(price) = price_phrase(filter) {
        text.push_str(&format!(" {price}"));
    }
    if let Some(name) = &filter.project_name {
        text.push_str(&format!(" matching \"{name}\""));
    }

    text
}

fn describe_criteria(filter: &PropertyFilter) -> Vec<String> {
    let mut parts = Vec::new();
    if let Some(bhk) = filter.bhk {
        parts.push(format!("{bhk}BHK"));
    }
    match &filter.status {
        Some(ProjectStatus::ReadyToMove) => parts.push("ready to move".to_string()),
        Some(ProjectStatus::UnderConstruction) => parts.push("under construction".to_string()),
        _ => {}
    }
    if let Some(city) = &filter.city {
        parts.push(format!("in {city}"));
    }
    if let Some(price) = price_phrase(filter) {
        parts.push(price);
    }
    if let Some(name) = &filter.project_name {
        parts.push(format!("project name containing \"{name}\""));
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_render_in_crores_and_lakhs() {
        assert_eq!(format_price_inr(50_000_000), "₹5.00 Cr");
        assert_eq!(format_price_inr(10_000_000), "₹1.00 Cr");
        assert_eq!(format_price_inr(5_000_000), "₹50.00 L");
        assert_eq!(format_price_inr(2_500_000), "₹25.00 L");
    }

    #[test]
    fn summary_enumerates_present_fields() {
        let filter = PropertyFilter {
            city: Some("Mumbai".to_string()),
            bhk: Some(3),
            price_max_inr: Some(50_000_000),
            ..Default::default()
        };
        assert_eq!(
            summarize(&filter, 7),
            "Found 7 3BHK properties in Mumbai under ₹5.00 Cr"
        );
    }

    #[test]
    fn summary_does_not_fabricate_constraints() {
        assert_eq!(summarize(&PropertyFilter::default(), 12), "Found 12 properties");
    }

    #[test]
    fn single_result_is_singular() {
        let filter = PropertyFilter {
            bhk: Some(2),
            ..Default::default()
        };
        assert_eq!(summarize(&filter, 1), "Found 1 2BHK property");
    }

    #[test]
    fn price_range_reads_as_between() {
        let filter = PropertyFilter {
            bhk: Some(4),
            price_min_inr: Some(30_000_000),
            price_max_inr: Some(70_000_000),
            ..Default::default()
        };
        assert_eq!(
            summarize(&filter, 3),
            "Found 3 4BHK properties between ₹3.00 Cr and ₹7.00 Cr"
        );
    }

    #[test]
    fn zero_results_echo_the_applied_filter() {
        let filter = PropertyFilter {
            city: Some("Pune".to_string()),
            bhk: Some(5),
            status: Some(ProjectStatus::ReadyToMove),
            ..Default::default()
        };
        let text = summarize(&filter, 0);
        assert!(text.starts_with("No properties found matching your criteria."));
        assert!(text.contains("5BHK"));
        assert!(text.contains("ready to move"));
        assert!(text.contains("in Pune"));
    }

    #[test]
    fn zero_results_with_empty_filter_has_no_echo() {
        assert_eq!(
            summarize(&PropertyFilter::default(), 0),
            "No properties found matching your criteria."
        );
    }
}
