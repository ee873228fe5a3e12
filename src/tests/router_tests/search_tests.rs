use crate::tests::utils::{body_string, get, make_engine};

#[test]
fn search_renders_matches_and_summary() {
    let engine = make_engine();

    let mut resp = get(&engine, "/search?q=3BHK%20in%20Mumbai%20under%205%20Cr").unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Found 1 3BHK property in Mumbai under ₹5.00 Cr"));
    assert!(body.contains("Sunrise Heights"));
    assert!(!body.contains("Gurukripa"));
}

#[test]
fn plus_encoded_queries_decode() {
    let engine = make_engine();

    let mut resp = get(&engine, "/search?q=2BHK+in+Pune").unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Found 2 2BHK properties in Pune"));
    assert!(body.contains("Gurukripa Residency"));
    assert!(body.contains("Palm Grove"));
}

#[test]
fn empty_query_shows_the_whole_inventory() {
    let engine = make_engine();

    let mut resp = get(&engine, "/search?q=").unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Found 4 properties"));
}

#[test]
fn applied_filters_are_displayed_verbatim() {
    let engine = make_engine();

    let mut resp = get(&engine, "/search?q=2bhk+under+2+cr").unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("&quot;bhk&quot;: 2"));
    assert!(body.contains("&quot;price_max_inr&quot;: 20000000"));
}

#[test]
fn zero_results_render_the_empty_state() {
    let engine = make_engine();

    let mut resp = get(&engine, "/search?q=5BHK+in+Mumbai").unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("No properties found matching your criteria."));
    assert!(body.contains("5BHK"));
}

#[test]
fn export_returns_a_spreadsheet_attachment() {
    let engine = make_engine();

    let resp = get(&engine, "/export?q=2BHK+in+Pune").unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    let disposition = resp.headers().get("Content-Disposition").unwrap();
    assert!(disposition
        .to_str()
        .unwrap()
        .contains("property_search_results.xlsx"));
}
