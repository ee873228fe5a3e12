use crate::errors::ServerError;
use crate::responses::html_response;
use crate::responses::ResultResp;
use crate::search::SearchEngine;
use crate::spreadsheets::export_listings_xlsx;
use crate::templates::pages::{home_page, project_page, results_page, HomeVm, ResultsVm};
use astra::Request;

pub fn handle(req: Request, engine: &SearchEngine) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => html_response(home_page(&HomeVm {
            total_listings: engine.total_listings(),
        })),

        ("GET", "/search") => {
            let params = parse_query(&req);
            let query = params.get("q").map(String::as_str).unwrap_or("");
            let outcome = engine.process_query(query);

            let filters_json = serde_json::to_string_pretty(&outcome.filter.to_json())
                .map_err(|_| ServerError::InternalError)?;

            html_response(results_page(&ResultsVm {
                query,
                summary: &outcome.summary,
                filters_json: &filters_json,
                listings: &outcome.results,
            }))
        }

        ("GET", "/export") => {
            let params = parse_query(&req);
            let query = params.get("q").map(String::as_str).unwrap_or("");
            let outcome = engine.process_query(query);
            export_listings_xlsx(&outcome.results)
        }

        ("GET", path) if path.starts_with("/project/") => {
            let slug = &path["/project/".len()..];
            let listings = engine.listings_for_slug(slug);
            if listings.is_empty() {
                return Err(ServerError::NotFound);
            }
            html_response(project_page(&listings))
        }

        _ => Err(ServerError::NotFound),
    }
}

fn parse_query(req: &Request) -> std::collections::HashMap<String, String> {
    let mut map = std::collections::HashMap::new();

    if let Some(q) = req.uri().query() {
        for (key, value) in url::form_urlencoded::parse(q.as_bytes()) {
            map.insert(key.into_owned(), value.into_owned());
        }
    }

    map
}
