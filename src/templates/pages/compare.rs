// templates/pages/compare.rs

use crate::domain::format_cedis;
use crate::domain::stats::{LocationStats, TRACKED_BEDROOMS};
use crate::templates::components::card;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn compare_page(
    locations: &[String],
    pair: Option<(&LocationStats, &LocationStats)>,
) -> Markup {
    desktop_layout(
        "Compare Neighborhoods",
        html! {
            section class="card" {
                h2 { "Compare Neighborhoods" }
                form method="get" action="/compare" {
                    (location_select("a", locations, pair.map(|(a, _)| a.location.as_str())))
                    " vs "
                    (location_select("b", locations, pair.map(|(_, b)| b.location.as_str())))
                    " "
                    button type="submit" { "Compare" }
                }
            }

            @if let Some((a, b)) = pair {
                (card("Side by Side", comparison_table(a, b)))
            }
        },
    )
}

fn location_select(name: &str, locations: &[String], selected: Option<&str>) -> Markup {
    html! {
        select name=(name) {
            option value="" { "Select neighborhood" }
            @for loc in locations {
                @if selected == Some(loc.as_str()) {
                    option value=(loc) selected { (loc) }
                } @else {
                    option value=(loc) { (loc) }
                }
            }
        }
    }
}

fn comparison_table(a: &LocationStats, b: &LocationStats) -> Markup {
    html! {
        table {
            tr { th { "" } th { (a.location) } th { (b.location) } }
            tr {
                td { "Listings" }
                td { (a.count) }
                td { (b.count) }
            }
            tr {
                td { "Average rent" }
                td { (format_cedis(a.average_price.round() as i64)) }
                td { (format_cedis(b.average_price.round() as i64)) }
            }
            tr {
                td { "Range" }
                td { (format_cedis(a.min_price.round() as i64)) " – " (format_cedis(a.max_price.round() as i64)) }
                td { (format_cedis(b.min_price.round() as i64)) " – " (format_cedis(b.max_price.round() as i64)) }
            }
            @for beds in TRACKED_BEDROOMS {
                tr {
                    td { (beds) "-bedroom avg" }
                    td { (bedroom_cell(a, beds)) }
                    td { (bedroom_cell(b, beds)) }
                }
            }
        }
    }
}

fn bedroom_cell(stats: &LocationStats, beds: u32) -> Markup {
    html! {
        @match stats.price_by_bedroom.get(&beds) {
            Some(price) => { (format_cedis(price.round() as i64)) }
            None => { span class="muted" { "no data" } }
        }
    }
}
