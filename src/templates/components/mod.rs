use crate::domain::estimate::Confidence;
use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h3 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Confidence label plus a five-segment meter, like the original UI.
pub fn confidence_badge(confidence: Confidence, count: usize) -> Markup {
    let filled = match confidence {
        Confidence::High => 5,
        Confidence::Medium => 3,
        Confidence::Low => 1,
    };
    html! {
        div class="confidence" {
            strong { (confidence.label()) }
            span class="muted" { " — based on " (count) " similar properties " }
            @for i in 1..=5 {
                @if i <= filled { span { "▰" } } @else { span { "▱" } }
            }
        }
    }
}

pub fn price_box(label: &str, value: &str, highlight: bool) -> Markup {
    html! {
        div class={ "price-box" (if highlight { " average" } else { "" }) } {
            div class="price-label" { (label) }
            div class="price-value" { (value) span class="muted" { "/month" } }
        }
    }
}
