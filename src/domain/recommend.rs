// src/domain/recommend.rs
//
// Alternative suggestions shown next to an estimate. Four independent
// passes over the location stats, concatenated in a fixed order:
// cheaper alternatives, affordable upgrades, best deals, budget stretch.
// Passes filter; they never fail.

use crate::dataset::Listing;
use crate::domain::estimate::Confidence;
use crate::domain::format_cedis;
use crate::domain::stats::{location_stats, LocationStats};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    CheaperAlternative,
    AffordableUpgrade,
    BestDeal,
    BudgetStretch,
}

impl RecommendationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            RecommendationKind::CheaperAlternative => "💰",
            RecommendationKind::AffordableUpgrade => "⬆️",
            RecommendationKind::BestDeal => "🎯",
            RecommendationKind::BudgetStretch => "✨",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            RecommendationKind::CheaperAlternative => "Save Money",
            RecommendationKind::AffordableUpgrade => "More Space",
            RecommendationKind::BestDeal => "Best Value",
            RecommendationKind::BudgetStretch => "Upgrade Option",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub location: String,
    pub price: i64,
    pub bedrooms: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<i64>,
    pub reason: String,
    pub confidence: Confidence,
}

/// Price for the requested bedroom count, or the location average when the
/// per-bedroom figure is missing (or recorded as zero).
fn bedroom_or_average(stats: &LocationStats, bedrooms: u32) -> f64 {
    stats
        .price_by_bedroom
        .get(&bedrooms)
        .copied()
        .filter(|p| *p > 0.0)
        .unwrap_or(stats.average_price)
}

/// Three-level confidence used by the cheaper/upgrade passes.
fn tiered_confidence(count: usize) -> Confidence {
    if count >= 5 {
        Confidence::High
    } else if count >= 3 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

/// Deals and stretch options never drop below medium.
fn deal_confidence(count: usize) -> Confidence {
    if count >= 5 {
        Confidence::High
    } else {
        Confidence::Medium
    }
}

pub fn recommendations(
    budget: f64,
    preferred_location: &str,
    bedrooms: u32,
    listings: &[Listing],
) -> Vec<Recommendation> {
    let stats = location_stats(listings);
    let mut recs = Vec::new();

    let current = stats.iter().find(|s| s.location == preferred_location);
    let current_price = current
        .and_then(|s| s.price_by_bedroom.get(&bedrooms).copied().filter(|p| *p > 0.0))
        .or_else(|| current.map(|s| s.average_price).filter(|p| *p > 0.0))
        .unwrap_or(budget);

    // 1. Cheaper alternatives: same bedrooms, different location, at least
    // 15% below what the preferred location costs.
    let mut cheaper: Vec<(f64, f64, &LocationStats)> = stats
        .iter()
        .filter_map(|s| {
            let price = bedroom_or_average(s, bedrooms);
            if price > 0.0 && price < current_price * 0.85 && s.location != preferred_location {
                Some((current_price - price, price, s))
            } else {
                None
            }
        })
        .collect();
    cheaper.sort_by(|a, b| b.0.total_cmp(&a.0));
    for (savings, price, s) in cheaper.into_iter().take(3) {
        let savings = savings.round() as i64;
        recs.push(Recommendation {
            kind: RecommendationKind::CheaperAlternative,
            location: s.location.clone(),
            price: price.round() as i64,
            bedrooms,
            savings: Some(savings),
            reason: format!(
                "Save {}/month vs {preferred_location}",
                format_cedis(savings)
            ),
            confidence: tiered_confidence(s.count),
        });
    }

    // 2. Affordable upgrades: one more bedroom within 110% of the budget.
    if bedrooms < 5 {
        let mut upgrades: Vec<(f64, &LocationStats)> = stats
            .iter()
            .filter_map(|s| {
                let price = s
                    .price_by_bedroom
                    .get(&(bedrooms + 1))
                    .copied()
                    .filter(|p| *p > 0.0)?;
                (price <= budget * 1.1).then_some((price, s))
            })
            .collect();
        upgrades.sort_by(|a, b| a.0.total_cmp(&b.0));
        for (price, s) in upgrades.into_iter().take(2) {
            let rounded = price.round() as i64;
            recs.push(Recommendation {
                kind: RecommendationKind::AffordableUpgrade,
                location: s.location.clone(),
                price: rounded,
                bedrooms: bedrooms + 1,
                savings: None,
                reason: format!(
                    "Get {} bedrooms for just {}/month",
                    bedrooms + 1,
                    format_cedis(rounded)
                ),
                confidence: tiered_confidence(s.count),
            });
        }
    }

    // 3. Best deals: priced below the area's own average and within budget.
    let mut deals: Vec<(f64, &LocationStats)> = stats
        .iter()
        .filter_map(|s| {
            let price = s
                .price_by_bedroom
                .get(&bedrooms)
                .copied()
                .filter(|p| *p > 0.0)?;
            (price < s.average_price * 0.9
                && price <= budget
                && s.location != preferred_location)
                .then_some((price, s))
        })
        .collect();
    deals.sort_by(|a, b| a.0.total_cmp(&b.0));
    for (price, s) in deals.into_iter().take(2) {
        recs.push(Recommendation {
            kind: RecommendationKind::BestDeal,
            location: s.location.clone(),
            price: price.round() as i64,
            bedrooms,
            savings: None,
            reason: format!("Below average price for {}", s.location),
            confidence: deal_confidence(s.count),
        });
    }

    // 4. Budget stretch: over budget, but only by up to 15%.
    let mut stretch: Vec<(f64, &LocationStats)> = stats
        .iter()
        .filter_map(|s| {
            let price = bedroom_or_average(s, bedrooms);
            (price > budget && price <= budget * 1.15 && s.location != preferred_location)
                .then_some((price, s))
        })
        .collect();
    stretch.sort_by(|a, b| a.0.total_cmp(&b.0));
    for (price, s) in stretch.into_iter().take(2) {
        recs.push(Recommendation {
            kind: RecommendationKind::BudgetStretch,
            location: s.location.clone(),
            price: price.round() as i64,
            bedrooms,
            savings: None,
            reason: format!(
                "Premium area for {} more/month",
                format_cedis((price - budget).round() as i64)
            ),
            confidence: deal_confidence(s.count),
        });
    }

    recs
}
