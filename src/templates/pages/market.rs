// templates/pages/market.rs
//
// Market overview: headline numbers plus the tables that back the
// original dashboard charts.

use crate::domain::format_cedis;
use crate::domain::stats::{LocationStats, MarketSummary, PriceRange};
use crate::templates::components::card;
use crate::templates::desktop_layout;
use maud::{html, Markup};
use std::collections::BTreeMap;

pub struct MarketVm {
    pub summary: MarketSummary,
    /// Top 10 by listing count.
    pub top_locations: Vec<LocationStats>,
    /// Cheapest areas with at least 5 listings, ascending by average.
    pub affordable: Vec<LocationStats>,
    pub bedroom_distribution: BTreeMap<u32, usize>,
    pub price_ranges: Vec<PriceRange>,
}

pub fn market_page(vm: &MarketVm) -> Markup {
    desktop_layout(
        "Market Overview",
        html! {
            @if vm.summary.total_listings == 0 {
                (card("No Data Available", html! {
                    p { "Add your scraped data to " code { "data/listings.json" } "." }
                }))
            } @else {
                section class="card" {
                    h2 { "Market Overview" }
                    div class="price-grid" {
                        (stat_box("Average Rent", &format_cedis(vm.summary.average_rent)))
                        (stat_box("Total Listings", &vm.summary.total_listings.to_string()))
                        (stat_box("Neighborhoods", &vm.summary.neighborhoods.to_string()))
                    }
                    p class="muted" {
                        "Average bedrooms per listing: " (vm.summary.average_bedrooms)
                    }
                }

                (card("Top Locations by Listings", location_table(&vm.top_locations)))
                (card("Most Affordable Areas (5+ listings)", location_table(&vm.affordable)))

                (card("Bedroom Distribution", html! {
                    table {
                        tr { th { "Bedrooms" } th { "Listings" } }
                        @for (beds, count) in &vm.bedroom_distribution {
                            tr { td { (beds) } td { (count) } }
                        }
                    }
                }))

                (card("Price Ranges", html! {
                    table {
                        tr { th { "Range" } th { "Listings" } }
                        @for range in &vm.price_ranges {
                            tr { td { (range.range) } td { (range.count) } }
                        }
                    }
                }))

                p { a href="/export/market.xlsx" { "Download market stats (XLSX)" } }
            }
        },
    )
}

fn stat_box(label: &str, value: &str) -> Markup {
    html! {
        div class="price-box" {
            div class="price-label" { (label) }
            div class="price-value" { (value) }
        }
    }
}

fn location_table(stats: &[LocationStats]) -> Markup {
    html! {
        table {
            tr {
                th { "Location" }
                th { "Listings" }
                th { "Average" }
                th { "Min" }
                th { "Max" }
            }
            @for stat in stats {
                tr {
                    td { (stat.location) }
                    td { (stat.count) }
                    td { (format_cedis(stat.average_price.round() as i64)) }
                    td { (format_cedis(stat.min_price.round() as i64)) }
                    td { (format_cedis(stat.max_price.round() as i64)) }
                }
            }
        }
    }
}
