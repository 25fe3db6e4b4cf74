use crate::dataset::Listing;
use crate::db::{searches, Database};
use crate::domain::estimate::estimate_price;
use crate::domain::recommend::recommendations;
use crate::domain::stats::{
    bedroom_distribution, location_stats, market_summary, price_ranges, unique_locations,
};
use crate::errors::ServerError;
use crate::reports::{share_link, text_summary};
use crate::responses::{
    html_response, json_response, redirect_response, text_response, ResultResp,
};
use crate::spreadsheets::export_market_xlsx;
use crate::templates::pages::{
    compare_page, estimator_page, market_page, searches_page, EstimateView, MarketVm,
};
use astra::Request;
use std::collections::HashMap;
use std::io::Read;

pub fn handle(req: Request, db: &Database, listings: &[Listing]) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => estimator(&req, listings),
        ("GET", "/market") => market(listings),
        ("GET", "/compare") => compare(&req, listings),

        ("GET", "/searches") => html_response(searches_page(&searches::list_searches(db)?)),
        ("POST", "/searches/save") => save_search(req, db, listings),
        ("POST", "/searches/delete") => delete_search(req, db),
        ("POST", "/searches/clear") => {
            searches::clear_searches(db)?;
            redirect_response("/searches")
        }

        // JSON mirror of the query interface, for charts and tooling.
        ("GET", "/api/locations") => json_response(200, &unique_locations(listings)),
        ("GET", "/api/stats") => json_response(200, &location_stats(listings)),
        ("GET", "/api/bedrooms") => json_response(200, &bedroom_distribution(listings)),
        ("GET", "/api/price-ranges") => json_response(200, &price_ranges(listings)),
        ("GET", "/api/estimate") => api_estimate(&req, listings),
        ("GET", "/api/recommendations") => api_recommendations(&req, listings),

        ("GET", "/export/market.xlsx") => export_market_xlsx(&location_stats(listings)),
        ("GET", "/export/estimate.txt") => export_estimate_txt(&req, listings),

        _ => Err(ServerError::NotFound),
    }
}

fn estimator(req: &Request, listings: &[Listing]) -> ResultResp {
    let params = parse_query(req);
    let locations = unique_locations(listings);

    let query = estimate_query(&params)?;
    let view = match &query {
        Some((location, bedrooms)) => {
            estimate_price(location, *bedrooms, listings).map(|estimate| {
                let recs =
                    recommendations(estimate.average as f64, location, *bedrooms, listings);
                let link = share_link(&base_url(req), location, *bedrooms)
                    .unwrap_or_else(|_| String::new());
                EstimateView {
                    location: location.clone(),
                    bedrooms: *bedrooms,
                    estimate,
                    recommendations: recs,
                    share_link: link,
                }
            })
        }
        None => None,
    };

    let query_ref = query.as_ref().map(|(l, b)| (l.as_str(), *b));
    html_response(estimator_page(&locations, query_ref, view.as_ref()))
}

fn market(listings: &[Listing]) -> ResultResp {
    let stats = location_stats(listings);

    let top_locations: Vec<_> = stats.iter().take(10).cloned().collect();
    // Cheapest areas, but only where there is enough data to trust the mean.
    let mut affordable: Vec<_> = stats.iter().filter(|s| s.count >= 5).cloned().collect();
    affordable.sort_by(|a, b| a.average_price.total_cmp(&b.average_price));
    affordable.truncate(10);

    let vm = MarketVm {
        summary: market_summary(listings),
        top_locations,
        affordable,
        bedroom_distribution: bedroom_distribution(listings),
        price_ranges: price_ranges(listings),
    };
    html_response(market_page(&vm))
}

fn compare(req: &Request, listings: &[Listing]) -> ResultResp {
    let params = parse_query(req);
    let locations = unique_locations(listings);
    let stats = location_stats(listings);

    let pair = match (param(&params, "a"), param(&params, "b")) {
        (Some(a), Some(b)) => {
            let left = stats.iter().find(|s| s.location == a);
            let right = stats.iter().find(|s| s.location == b);
            match (left, right) {
                (Some(l), Some(r)) => Some((l, r)),
                _ => None,
            }
        }
        _ => None,
    };

    html_response(compare_page(&locations, pair))
}

fn save_search(mut req: Request, db: &Database, listings: &[Listing]) -> ResultResp {
    let form = parse_form(&mut req)?;
    let (location, bedrooms) = require_pair(&form)?;

    // Estimates are ephemeral; recompute rather than trusting form fields.
    let estimate = estimate_price(&location, bedrooms, listings).ok_or_else(|| {
        ServerError::BadRequest(format!("No data for {bedrooms} bedrooms in {location}"))
    })?;

    searches::save_search(db, &location, bedrooms, &estimate)?;
    redirect_response("/searches")
}

fn delete_search(mut req: Request, db: &Database) -> ResultResp {
    let form = parse_form(&mut req)?;
    let id: i64 = param(&form, "id")
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| ServerError::BadRequest("Missing or invalid id".to_string()))?;

    searches::delete_search(db, id)?;
    redirect_response("/searches")
}

fn api_estimate(req: &Request, listings: &[Listing]) -> ResultResp {
    let params = parse_query(req);
    let (location, bedrooms) = estimate_query(&params)?
        .ok_or_else(|| ServerError::BadRequest("location and bedrooms are required".into()))?;

    match estimate_price(&location, bedrooms, listings) {
        Some(estimate) => json_response(200, &estimate),
        // Insufficient data is not a server fault; the caller just asked
        // about a location we have never seen.
        None => json_response(
            404,
            &serde_json::json!({ "error": "no data available", "location": location }),
        ),
    }
}

fn api_recommendations(req: &Request, listings: &[Listing]) -> ResultResp {
    let params = parse_query(req);
    let (location, bedrooms) = estimate_query(&params)?
        .ok_or_else(|| ServerError::BadRequest("location and bedrooms are required".into()))?;
    let budget: f64 = param(&params, "budget")
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| ServerError::BadRequest("budget must be a number".into()))?;

    json_response(200, &recommendations(budget, &location, bedrooms, listings))
}

fn export_estimate_txt(req: &Request, listings: &[Listing]) -> ResultResp {
    let params = parse_query(req);
    let (location, bedrooms) = estimate_query(&params)?
        .ok_or_else(|| ServerError::BadRequest("location and bedrooms are required".into()))?;

    let estimate =
        estimate_price(&location, bedrooms, listings).ok_or(ServerError::NotFound)?;
    text_response(
        text_summary(&location, bedrooms, &estimate),
        "accra-rentals-estimate.txt",
    )
}

/// The (location, bedrooms) pair used by several routes. Absent params mean
/// "no query yet"; present-but-garbled ones are a BadRequest.
fn estimate_query(
    params: &HashMap<String, String>,
) -> Result<Option<(String, u32)>, ServerError> {
    match (param(params, "location"), param(params, "bedrooms")) {
        (Some(location), Some(bedrooms)) => {
            let bedrooms: u32 = bedrooms
                .parse()
                .map_err(|_| ServerError::BadRequest("bedrooms must be a number".to_string()))?;
            Ok(Some((location, bedrooms)))
        }
        _ => Ok(None),
    }
}

fn require_pair(form: &HashMap<String, String>) -> Result<(String, u32), ServerError> {
    estimate_query(form)?
        .ok_or_else(|| ServerError::BadRequest("location and bedrooms are required".to_string()))
}

/// Non-empty value for a key, if any.
fn param(params: &HashMap<String, String>, key: &str) -> Option<String> {
    params.get(key).filter(|v| !v.is_empty()).cloned()
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    let raw = req.uri().query().unwrap_or("");
    url::form_urlencoded::parse(raw.as_bytes())
        .into_owned()
        .collect()
}

fn parse_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Failed to read body: {e}")))?;
    Ok(url::form_urlencoded::parse(&body).into_owned().collect())
}

fn base_url(req: &Request) -> String {
    let host = req
        .headers()
        .get("host")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost:3000");
    format!("http://{host}/")
}
