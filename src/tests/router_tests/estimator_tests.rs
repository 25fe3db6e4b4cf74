// src/tests/router_tests/estimator_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{get, make_db, read_body, sample_listings};

#[test]
fn landing_page_lists_all_neighborhoods() {
    let db = make_db();
    let listings = sample_listings();

    let mut resp = handle(get("/"), &db, &listings).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(&mut resp);
    assert!(body.contains("Estimate Apartment Rent"));
    for loc in ["Dansoman", "East Legon", "Kasoa", "Labone", "Osu"] {
        assert!(body.contains(loc), "missing {loc}");
    }
}

#[test]
fn estimate_query_renders_price_band_and_recommendations() {
    let db = make_db();
    let listings = sample_listings();

    let mut resp = handle(get("/?location=Osu&bedrooms=2"), &db, &listings).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(&mut resp);
    assert!(body.contains("Estimated Monthly Rent"));
    // 3 exact Osu 2-beds: 4000/5000/6000.
    assert!(body.contains("GH₵4,000"));
    assert!(body.contains("GH₵5,000"));
    assert!(body.contains("GH₵6,000"));
    assert!(body.contains("Low Confidence"));
    // Dansoman 2-beds are well under 85% of Osu's price.
    assert!(body.contains("Smart Recommendations"));
    assert!(body.contains("Dansoman"));
    // Share link points back at this same query.
    assert!(body.contains("location=Osu"));
}

#[test]
fn unknown_location_shows_no_data_card() {
    let db = make_db();
    let listings = sample_listings();

    let mut resp = handle(get("/?location=Kumasi&bedrooms=2"), &db, &listings).unwrap();
    assert_eq!(resp.status(), 200);
    let body = read_body(&mut resp);
    assert!(body.contains("No Data Available"));
}

#[test]
fn garbled_bedrooms_is_a_bad_request() {
    let db = make_db();
    let listings = sample_listings();

    let err = handle(get("/?location=Osu&bedrooms=two"), &db, &listings).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn compare_page_shows_both_locations() {
    let db = make_db();
    let listings = sample_listings();

    let mut resp = handle(get("/compare?a=Osu&b=Dansoman"), &db, &listings).unwrap();
    assert_eq!(resp.status(), 200);
    let body = read_body(&mut resp);
    assert!(body.contains("Side by Side"));
    assert!(body.contains("Osu"));
    assert!(body.contains("Dansoman"));
}

#[test]
fn unknown_route_is_not_found() {
    let db = make_db();
    let listings = sample_listings();

    let err = handle(get("/nope"), &db, &listings).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
