// src/tests/router_tests/searches_tests.rs

use crate::db::searches::list_searches;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{get, make_db, post_form, read_body, sample_listings};

#[test]
fn save_recomputes_estimate_and_redirects() {
    let db = make_db();
    let listings = sample_listings();

    let resp = handle(
        post_form("/searches/save", "location=Osu&bedrooms=2"),
        &db,
        &listings,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/searches");

    let saved = list_searches(&db).unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].location, "Osu");
    assert_eq!(saved[0].bedrooms, 2);
    assert_eq!(saved[0].estimate.average, 5000);
}

#[test]
fn save_rejects_locations_with_no_data() {
    let db = make_db();
    let listings = sample_listings();

    let err = handle(
        post_form("/searches/save", "location=Kumasi&bedrooms=2"),
        &db,
        &listings,
    )
    .unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
    assert!(list_searches(&db).unwrap().is_empty());
}

#[test]
fn saved_searches_render_and_delete() {
    let db = make_db();
    let listings = sample_listings();

    handle(
        post_form("/searches/save", "location=Osu&bedrooms=2"),
        &db,
        &listings,
    )
    .unwrap();

    let mut resp = handle(get("/searches"), &db, &listings).unwrap();
    let body = read_body(&mut resp);
    assert!(body.contains("2 bedrooms in Osu"));
    assert!(body.contains("GH₵5,000"));

    let id = list_searches(&db).unwrap()[0].id;
    let resp = handle(
        post_form("/searches/delete", &format!("id={id}")),
        &db,
        &listings,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);
    assert!(list_searches(&db).unwrap().is_empty());
}

#[test]
fn clear_removes_every_saved_search() {
    let db = make_db();
    let listings = sample_listings();

    for form in ["location=Osu&bedrooms=2", "location=Labone&bedrooms=1"] {
        handle(post_form("/searches/save", form), &db, &listings).unwrap();
    }
    assert_eq!(list_searches(&db).unwrap().len(), 2);

    let resp = handle(post_form("/searches/clear", ""), &db, &listings).unwrap();
    assert_eq!(resp.status(), 303);
    assert!(list_searches(&db).unwrap().is_empty());
}

#[test]
fn empty_state_invites_saving() {
    let db = make_db();
    let listings = sample_listings();

    let mut resp = handle(get("/searches"), &db, &listings).unwrap();
    let body = read_body(&mut resp);
    assert!(body.contains("No Saved Searches Yet"));
}
