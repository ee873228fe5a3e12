use crate::errors::ServerError;
use crate::tests::utils::{body_string, get, make_engine};

#[test]
fn home_shows_inventory_stats() {
    let engine = make_engine();

    let mut resp = get(&engine, "/").unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Property Search"));
    assert!(
        body.contains("<strong>4</strong>"),
        "Home page did not show the total listing count"
    );
    assert!(body.contains("Mumbai &amp; Pune"));
}

#[test]
fn project_detail_lists_every_variant() {
    let engine = make_engine();

    let mut resp = get(&engine, "/project/sunrise-heights").unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Sunrise Heights"));
    assert!(body.contains("₹4.50 Cr"));
    assert!(body.contains("₹3.00 Cr"));
    assert!(!body.contains("Gurukripa"));
}

#[test]
fn unknown_project_slug_is_not_found() {
    let engine = make_engine();
    let err = get(&engine, "/project/no-such-project").unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn unknown_route_is_not_found() {
    let engine = make_engine();
    let err = get(&engine, "/admin").unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
