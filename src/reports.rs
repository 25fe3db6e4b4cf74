// src/reports.rs
//
// Plain-text estimate summary and shareable links. Thin consumers of a
// PriceEstimate; no computation of their own.

use crate::domain::estimate::PriceEstimate;
use crate::domain::format_cedis;
use crate::errors::ServerError;
use url::Url;

/// Copy-paste friendly summary of one estimate.
pub fn text_summary(location: &str, bedrooms: u32, estimate: &PriceEstimate) -> String {
    let plural = if bedrooms == 1 { "" } else { "s" };
    format!(
        "🏠 Accra Rentals - Price Estimate\n\
         \n\
         Property: {bedrooms} bedroom{plural} in {location}\n\
         \n\
         💰 Estimated Monthly Rent:\n\
         • Low:     {}\n\
         • Average: {}\n\
         • High:    {}\n\
         \n\
         📊 Confidence: {}\n\
         📈 Based on {} similar listings\n\
         \n\
         Generated: {}\n\
         Visit: AccraRentals.com for more insights",
        format_cedis(estimate.low),
        format_cedis(estimate.average),
        format_cedis(estimate.high),
        capitalize(estimate.confidence.as_str()),
        estimate.count,
        chrono::Utc::now().format("%Y-%m-%d"),
    )
}

/// Link back to the estimator with the query baked into the URL, so the
/// receiving side recomputes the same estimate.
pub fn share_link(base: &str, location: &str, bedrooms: u32) -> Result<String, ServerError> {
    let url = Url::parse_with_params(
        base,
        &[("location", location), ("bedrooms", &bedrooms.to_string())],
    )
    .map_err(|e| ServerError::DataError(format!("Bad base URL {base}: {e}")))?;
    Ok(url.to_string())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
