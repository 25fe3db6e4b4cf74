use crate::db::connection::{init_db, Database};
use crate::domain::normalize::LocationAliases;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;

mod dataset;
mod db;
mod domain;
mod errors;
mod reports;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn main() {
    let data_path = env_or("RENTALS_DATA", "data/listings.json");
    let db_path = env_or("RENTALS_DB", "rentals.sqlite3");
    let addr_str = env_or("RENTALS_ADDR", "127.0.0.1:3000");

    // 1️⃣ Load the scraped dataset. It is immutable for the whole session;
    // every query recomputes from this one in-memory collection.
    let mut listings = match dataset::load_listings(&data_path) {
        Ok(listings) => listings,
        Err(e) => {
            eprintln!("❌ Failed to load dataset: {e}");
            std::process::exit(1);
        }
    };

    // Optional canonicalization pre-pass. Off by default: grouping then
    // matches the raw scraped strings, like the original dashboard.
    if std::env::var("RENTALS_NORMALIZE").map_or(false, |v| v == "1") {
        let aliases = match std::env::var("RENTALS_ALIASES") {
            Ok(path) => match LocationAliases::from_json_file(&path) {
                Ok(aliases) => aliases,
                Err(e) => {
                    eprintln!("❌ Failed to load alias table: {e}");
                    std::process::exit(1);
                }
            },
            Err(_) => LocationAliases::default(),
        };
        dataset::normalize_locations(&mut listings, &aliases);
        println!("Location names normalized against the alias table");
    }

    println!("Loaded {} listings from {data_path}", listings.len());

    // 2️⃣ Saved-searches store, initialized from schema.sql
    let db = Database::new(db_path);
    if let Err(e) = init_db(&db, "sql/schema.sql") {
        eprintln!("❌ Database initialization failed: {e}");
        std::process::exit(1);
    }

    // 3️⃣ Start the server
    let addr: SocketAddr = match addr_str.parse() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("❌ Invalid RENTALS_ADDR {addr_str}: {e}");
            std::process::exit(1);
        }
    };
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 4️⃣ Serve requests; the dataset is shared read-only across workers.
    let listings = Arc::new(listings);
    let result = server.serve(move |req, _info| match handle(req, &db, &listings) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
