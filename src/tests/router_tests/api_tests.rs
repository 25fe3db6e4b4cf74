// src/tests/router_tests/api_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{get, make_db, read_body, sample_listings};
use serde_json::Value;

#[test]
fn estimate_endpoint_returns_exact_match_figures() {
    let db = make_db();
    let listings = sample_listings();

    let mut resp = handle(get("/api/estimate?location=Osu&bedrooms=2"), &db, &listings).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );

    let body: Value = serde_json::from_str(&read_body(&mut resp)).unwrap();
    assert_eq!(body["low"], 4000);
    assert_eq!(body["average"], 5000);
    assert_eq!(body["high"], 6000);
    assert_eq!(body["count"], 3);
    assert_eq!(body["confidence"], "low");
}

#[test]
fn estimate_endpoint_is_404_for_unknown_locations() {
    let db = make_db();
    let listings = sample_listings();

    let mut resp =
        handle(get("/api/estimate?location=Kumasi&bedrooms=2"), &db, &listings).unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = serde_json::from_str(&read_body(&mut resp)).unwrap();
    assert_eq!(body["error"], "no data available");
}

#[test]
fn estimate_endpoint_requires_both_params() {
    let db = make_db();
    let listings = sample_listings();

    let err = handle(get("/api/estimate?location=Osu"), &db, &listings).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn locations_endpoint_is_sorted() {
    let db = make_db();
    let listings = sample_listings();

    let mut resp = handle(get("/api/locations"), &db, &listings).unwrap();
    let body: Vec<String> = serde_json::from_str(&read_body(&mut resp)).unwrap();
    assert_eq!(body, vec!["Dansoman", "East Legon", "Kasoa", "Labone", "Osu"]);
}

#[test]
fn stats_endpoint_orders_by_listing_count() {
    let db = make_db();
    let listings = sample_listings();

    let mut resp = handle(get("/api/stats"), &db, &listings).unwrap();
    let body: Value = serde_json::from_str(&read_body(&mut resp)).unwrap();
    let stats = body.as_array().unwrap();
    assert_eq!(stats.len(), 5);
    assert_eq!(stats[0]["location"], "Osu");
    assert_eq!(stats[0]["count"], 3);
    assert_eq!(stats[0]["priceByBedroom"]["2"], 5000.0);
}

#[test]
fn bedroom_distribution_skips_untagged_listings() {
    let db = make_db();
    let listings = sample_listings();

    let mut resp = handle(get("/api/bedrooms"), &db, &listings).unwrap();
    let body: Value = serde_json::from_str(&read_body(&mut resp)).unwrap();
    assert_eq!(body["2"], 5);
    assert_eq!(body["1"], 1);
    assert_eq!(body["3"], 1);
    // The Kasoa listing has no bedroom count and must not appear anywhere.
    assert_eq!(body.as_object().unwrap().len(), 3);
}

#[test]
fn price_ranges_cover_the_whole_dataset() {
    let db = make_db();
    let listings = sample_listings();

    let mut resp = handle(get("/api/price-ranges"), &db, &listings).unwrap();
    let body: Value = serde_json::from_str(&read_body(&mut resp)).unwrap();
    let ranges = body.as_array().unwrap();
    assert_eq!(ranges.len(), 5);
    let total: u64 = ranges
        .iter()
        .map(|r| r["count"].as_u64().unwrap())
        .sum();
    assert_eq!(total, listings.len() as u64);
}

#[test]
fn recommendations_endpoint_never_echoes_preferred_location() {
    let db = make_db();
    let listings = sample_listings();

    let mut resp = handle(
        get("/api/recommendations?location=Osu&bedrooms=2&budget=5000"),
        &db,
        &listings,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = serde_json::from_str(&read_body(&mut resp)).unwrap();
    for rec in body.as_array().unwrap() {
        if rec["type"] != "affordable_upgrade" {
            assert_ne!(rec["location"], "Osu");
        }
    }
}
