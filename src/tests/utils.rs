use crate::dataset::Listing;
use crate::db::connection::{init_db, Database};
use crate::domain::test_fixtures::listing;
use astra::Body;
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

/// Fresh temp database initialized from the production schema. Each test
/// runs on its own thread, so thread-local connections never collide.
pub fn make_db() -> Database {
    let path = std::env::temp_dir().join(format!(
        "accra_rentals_test_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path);
    init_db(&db, "sql/schema.sql").expect("Failed to initialize DB");
    db
}

/// Small but varied market: enough for every estimator tier and most
/// recommendation passes to have something to chew on.
pub fn sample_listings() -> Vec<Listing> {
    vec![
        listing("Osu", Some(2), 4000.0),
        listing("Osu", Some(2), 6000.0),
        listing("Osu", Some(2), 5000.0),
        listing("Dansoman", Some(2), 2000.0),
        listing("Dansoman", Some(2), 2100.0),
        listing("Labone", Some(1), 2500.0),
        listing("East Legon", Some(3), 12000.0),
        listing("Kasoa", None, 900.0),
    ]
}

pub fn get(uri: &str) -> astra::Request {
    http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &str) -> astra::Request {
    http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

pub fn read_body(resp: &mut astra::Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .expect("Failed to read response body");
    String::from_utf8(bytes).expect("Response body was not UTF-8")
}
