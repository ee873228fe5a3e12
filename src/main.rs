use crate::inventory::load_inventory;
use crate::router::handle;
use crate::search::SearchEngine;
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;

mod cities;
mod domain;
mod errors;
mod inventory;
mod query;
mod responses;
mod router;
mod search;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Build the inventory once from the four source exports.
    // A load failure is fatal: no partial inventory is ever served.
    let inventory = match load_inventory(
        "data/project.csv",
        "data/ProjectAddress.csv",
        "data/ProjectConfiguration.csv",
        "data/ProjectConfigurationVariant.csv",
    ) {
        Ok(inventory) => inventory,
        Err(e) => {
            eprintln!("❌ Inventory load failed: {e}");
            std::process::exit(1);
        }
    };
    println!("✅ Loaded {} listings", inventory.total());

    let engine = Arc::new(SearchEngine::new(inventory));

    // 2️⃣ Start the server
    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 3️⃣ Serve requests, sharing the read-only engine across workers
    let result = server.serve(move |req, _info| match handle(req, &engine) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
