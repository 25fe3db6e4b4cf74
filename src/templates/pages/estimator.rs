// templates/pages/estimator.rs
//
// The landing page: pick a neighborhood and bedroom count, get the
// low/average/high band, confidence, and recommendations. The same URL
// with query params doubles as the shareable link.

use crate::domain::estimate::PriceEstimate;
use crate::domain::format_cedis;
use crate::domain::recommend::Recommendation;
use crate::templates::components::{card, confidence_badge, price_box};
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Neighborhoods the market prices at a visible premium.
const PREMIUM_AREAS: &[&str] = &["East Legon", "Cantonments"];

pub struct EstimateView {
    pub location: String,
    pub bedrooms: u32,
    pub estimate: PriceEstimate,
    pub recommendations: Vec<Recommendation>,
    pub share_link: String,
}

pub fn estimator_page(
    locations: &[String],
    query: Option<(&str, u32)>,
    view: Option<&EstimateView>,
) -> Markup {
    desktop_layout(
        "Estimate Apartment Rent",
        html! {
            section class="card" {
                h2 { "Estimate Apartment Rent" }
                p class="muted" {
                    "Monthly rent estimates for apartments, based on real market data."
                }
                form method="get" action="/" {
                    label for="location" { "Location " }
                    select name="location" id="location" {
                        option value="" { "Select neighborhood" }
                        @for loc in locations {
                            @let selected = query.map_or(false, |(q, _)| q == loc.as_str());
                            @if selected {
                                option value=(loc) selected { (loc) }
                            } @else {
                                option value=(loc) { (loc) }
                            }
                        }
                    }
                    label for="bedrooms" { " Bedrooms " }
                    select name="bedrooms" id="bedrooms" {
                        @for num in 1..=5u32 {
                            @let selected = query.map_or(false, |(_, b)| b == num);
                            @if selected {
                                option value=(num) selected { (num) }
                            } @else {
                                option value=(num) { (num) }
                            }
                        }
                    }
                    " "
                    button type="submit" { "Get Estimate" }
                }
            }

            @match (query, view) {
                (Some((loc, beds)), None) => {
                    (card("No Data Available", html! {
                        p {
                            "No data available for " (beds) " bedroom properties in "
                            strong { (loc) } "."
                        }
                        p class="muted" { "Try another neighborhood or bedroom count." }
                    }))
                }
                (_, Some(v)) => { (estimate_section(v)) }
                _ => {}
            }
        },
    )
}

fn estimate_section(v: &EstimateView) -> Markup {
    let est = &v.estimate;
    let plural = if v.bedrooms == 1 { "" } else { "s" };
    let per_bedroom = (est.average as f64 / f64::from(v.bedrooms)).round() as i64;
    let position = if PREMIUM_AREAS.contains(&v.location.as_str()) {
        "Premium"
    } else {
        "Standard"
    };

    html! {
        section class="card" {
            h2 { "Estimated Monthly Rent" }
            p class="muted" { (v.bedrooms) " bedroom" (plural) " in " (v.location) }

            div class="price-grid" {
                (price_box("Low", &format_cedis(est.low), false))
                (price_box("Average", &format_cedis(est.average), true))
                (price_box("High", &format_cedis(est.high), false))
            }

            (confidence_badge(est.confidence, est.count))

            div class="price-grid" {
                div class="price-box" {
                    div class="price-label" { "Price per Bedroom" }
                    div class="price-value" { (format_cedis(per_bedroom)) }
                }
                div class="price-box" {
                    div class="price-label" { "Market Position" }
                    div class="price-value" { (position) }
                }
            }

            form method="post" action="/searches/save" class="inline" {
                input type="hidden" name="location" value=(v.location);
                input type="hidden" name="bedrooms" value=(v.bedrooms);
                button type="submit" { "Save Search" }
            }
            " "
            a href=(estimate_href("/export/estimate.txt", &v.location, v.bedrooms)) {
                "Download Summary"
            }

            p {
                label { "Share link " }
                input class="share-box" type="text" readonly value=(v.share_link);
            }
        }

        @if !v.recommendations.is_empty() {
            section class="card" {
                h2 { "Smart Recommendations" }
                div class="rec-grid" {
                    @for rec in &v.recommendations {
                        (recommendation_card(rec))
                    }
                }
            }
        }
    }
}

/// Query-encoded link for a (location, bedrooms) pair; locations like
/// "East Legon" need the encoding.
pub fn estimate_href(path: &str, location: &str, bedrooms: u32) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("location", location)
        .append_pair("bedrooms", &bedrooms.to_string())
        .finish();
    format!("{path}?{query}")
}

fn recommendation_card(rec: &Recommendation) -> Markup {
    let plural = if rec.bedrooms == 1 { "" } else { "s" };
    html! {
        div class="card" {
            div {
                span { (rec.kind.icon()) " " }
                strong { (rec.kind.title()) }
                span class="muted" { " · " (rec.confidence.label()) }
            }
            div {
                strong { (rec.location) }
                span class="muted" { " — " (rec.bedrooms) " bedroom" (plural) }
            }
            div class="price-value" {
                (format_cedis(rec.price)) span class="muted" { "/month" }
            }
            p class="muted" { (rec.reason) }
        }
    }
}
