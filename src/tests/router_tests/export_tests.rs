// src/tests/router_tests/export_tests.rs

use crate::router::handle;
use crate::tests::utils::{get, make_db, read_body, sample_listings};

#[test]
fn text_export_carries_the_full_summary() {
    let db = make_db();
    let listings = sample_listings();

    let mut resp = handle(
        get("/export/estimate.txt?location=Osu&bedrooms=2"),
        &db,
        &listings,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("accra-rentals-estimate.txt"));

    let body = read_body(&mut resp);
    assert!(body.contains("2 bedrooms in Osu"));
    assert!(body.contains("Low:     GH₵4,000"));
    assert!(body.contains("Average: GH₵5,000"));
    assert!(body.contains("High:    GH₵6,000"));
    assert!(body.contains("Based on 3 similar listings"));
}

#[test]
fn market_xlsx_downloads_with_spreadsheet_content_type() {
    let db = make_db();
    let listings = sample_listings();

    let mut resp = handle(get("/export/market.xlsx"), &db, &listings).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );

    // XLSX files are zip archives; check the magic bytes rather than parsing.
    let mut bytes = Vec::new();
    std::io::Read::read_to_end(&mut resp.body_mut().reader(), &mut bytes).unwrap();
    assert!(bytes.starts_with(b"PK"));
}
