use crate::domain::{Listing, ProjectStatus};
use crate::inventory::Inventory;
use crate::responses::ResultResp;
use crate::router::handle;
use crate::search::SearchEngine;
use astra::Body;
use http::Method;
use std::io::Read;

/// Small fixed inventory backing the router tests.
pub fn make_engine() -> SearchEngine {
    let listing = |name: &str,
                   city: &str,
                   locality: &str,
                   bhk: i64,
                   price: Option<i64>,
                   status: ProjectStatus| Listing {
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        status,
        city: city.to_string(),
        locality: Some(locality.to_string()),
        bhk_label: format!("{bhk}BHK"),
        bhk: Some(bhk),
        price_inr: price,
    };

    SearchEngine::new(Inventory {
        listings: vec![
            listing(
                "Sunrise Heights",
                "Mumbai",
                "Chembur",
                3,
                Some(45_000_000),
                ProjectStatus::ReadyToMove,
            ),
            listing(
                "Sunrise Heights",
                "Mumbai",
                "Chembur",
                2,
                Some(30_000_000),
                ProjectStatus::ReadyToMove,
            ),
            listing(
                "Gurukripa Residency",
                "Pune",
                "Baner",
                2,
                Some(18_000_000),
                ProjectStatus::UnderConstruction,
            ),
            listing(
                "Palm Grove",
                "Pune",
                "Wakad",
                2,
                None,
                ProjectStatus::ReadyToMove,
            ),
        ],
    })
}

/// Run one GET through the production router.
pub fn get(engine: &SearchEngine, path_and_query: &str) -> ResultResp {
    let req = http::Request::builder()
        .method(Method::GET)
        .uri(path_and_query)
        .body(Body::from(String::new()))
        .expect("Failed to build request");
    handle(req, engine)
}

pub fn body_string(resp: &mut astra::Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .expect("Failed to read response body");
    String::from_utf8(bytes).expect("Response body was not UTF-8")
}
