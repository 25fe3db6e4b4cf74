// src/dataset.rs
//
// The dataset is a pre-scraped JSON document with a top-level "listings"
// array. It is loaded once at startup and shared read-only for the lifetime
// of the process; every query recomputes from it.

use crate::domain::normalize::LocationAliases;
use crate::errors::ServerError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;

/// One scraped rental listing. `bedrooms` is genuinely optional in the
/// source data; listings without it still count toward location-level stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub price_text: String,
    pub bedrooms: Option<u32>,
    pub location: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub scraped_at: String,
}

#[derive(Debug, Deserialize)]
struct RentalDocument {
    listings: Vec<Listing>,
}

pub fn load_listings(path: &str) -> Result<Vec<Listing>, ServerError> {
    let file = File::open(path)
        .map_err(|e| ServerError::DataError(format!("Failed to open {path}: {e}")))?;
    let doc: RentalDocument = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| ServerError::DataError(format!("Failed to parse {path}: {e}")))?;
    Ok(doc.listings)
}

/// Optional pre-pass: rewrite every location through the alias table so the
/// aggregator groups on canonical neighborhood names. Off by default; the
/// estimator and aggregator otherwise compare raw strings.
pub fn normalize_locations(listings: &mut [Listing], aliases: &LocationAliases) {
    for listing in listings.iter_mut() {
        listing.location = aliases.normalize(&listing.location);
    }
}
