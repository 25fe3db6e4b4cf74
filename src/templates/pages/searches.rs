// templates/pages/searches.rs

use crate::db::searches::SavedSearch;
use crate::domain::format_cedis;
use crate::templates::components::card;
use crate::templates::desktop_layout;
use crate::templates::pages::estimator::estimate_href;
use maud::{html, Markup};

pub fn searches_page(searches: &[SavedSearch]) -> Markup {
    desktop_layout(
        "Saved Searches",
        html! {
            @if searches.is_empty() {
                (card("No Saved Searches Yet", html! {
                    p {
                        "When you estimate prices, click the \"Save Search\" button "
                        "to keep track of your searches."
                    }
                    p class="muted" { "Saved searches are stored locally on this machine." }
                }))
            } @else {
                section class="card" {
                    h2 { "Saved Searches" }
                    table {
                        tr {
                            th { "Saved" }
                            th { "Search" }
                            th { "Low" }
                            th { "Average" }
                            th { "High" }
                            th { "Confidence" }
                            th { "" }
                        }
                        @for search in searches {
                            (search_row(search))
                        }
                    }
                    form method="post" action="/searches/clear" {
                        button type="submit" { "Clear All" }
                    }
                }
            }
        },
    )
}

fn search_row(search: &SavedSearch) -> Markup {
    let plural = if search.bedrooms == 1 { "" } else { "s" };
    html! {
        tr {
            td { (search.saved_at.format("%b %-d, %Y %H:%M")) }
            td {
                a href=(estimate_href("/", &search.location, search.bedrooms)) {
                    (search.bedrooms) " bedroom" (plural) " in " (search.location)
                }
            }
            td { (format_cedis(search.estimate.low)) }
            td { (format_cedis(search.estimate.average)) }
            td { (format_cedis(search.estimate.high)) }
            td { (search.estimate.confidence.as_str()) }
            td {
                form method="post" action="/searches/delete" class="inline" {
                    input type="hidden" name="id" value=(search.id);
                    button type="submit" { "Delete" }
                }
            }
        }
    }
}
