// src/domain/stats.rs
//
// Per-location descriptive statistics plus the smaller distribution queries
// behind the market overview charts. Everything here is recomputed from the
// raw listing slice on each call; nothing is cached.

use crate::dataset::Listing;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Bedroom counts tracked in the per-location breakdown. Listings with more
/// bedrooms (or none recorded) still count toward the location totals, just
/// not this map.
pub const TRACKED_BEDROOMS: std::ops::RangeInclusive<u32> = 1..=5;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationStats {
    pub location: String,
    pub count: usize,
    pub average_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    /// Mean price per exact bedroom count (1..=5). Absent key = no listings.
    pub price_by_bedroom: BTreeMap<u32, f64>,
}

/// Group listings by raw location string and compute stats per group.
/// Result is sorted by listing count, descending; the sort is stable so
/// tied locations keep their first-encounter order. Unlike the estimator,
/// no price-positivity filter is applied here.
pub fn location_stats(listings: &[Listing]) -> Vec<LocationStats> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&Listing>> = HashMap::new();

    for listing in listings {
        groups
            .entry(listing.location.as_str())
            .or_insert_with(|| {
                order.push(listing.location.as_str());
                Vec::new()
            })
            .push(listing);
    }

    let mut stats: Vec<LocationStats> = order
        .into_iter()
        .map(|location| {
            let items = &groups[location];
            let prices: Vec<f64> = items.iter().map(|l| l.price).collect();
            let sum: f64 = prices.iter().sum();

            let mut price_by_bedroom = BTreeMap::new();
            for bed_count in TRACKED_BEDROOMS {
                let bedroom_prices: Vec<f64> = items
                    .iter()
                    .filter(|l| l.bedrooms == Some(bed_count))
                    .map(|l| l.price)
                    .collect();
                if !bedroom_prices.is_empty() {
                    let mean = bedroom_prices.iter().sum::<f64>() / bedroom_prices.len() as f64;
                    price_by_bedroom.insert(bed_count, mean);
                }
            }

            LocationStats {
                location: location.to_string(),
                count: items.len(),
                average_price: sum / prices.len() as f64,
                min_price: prices.iter().copied().fold(f64::INFINITY, f64::min),
                max_price: prices.iter().copied().fold(f64::NEG_INFINITY, f64::max),
                price_by_bedroom,
            }
        })
        .collect();

    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}

/// Distinct location strings, ascending lexicographic, no duplicates.
pub fn unique_locations(listings: &[Listing]) -> Vec<String> {
    let set: BTreeSet<&str> = listings.iter().map(|l| l.location.as_str()).collect();
    set.into_iter().map(str::to_string).collect()
}

/// Listing count per bedroom count. Listings with no bedroom value, or a
/// recorded zero, are left out entirely.
pub fn bedroom_distribution(listings: &[Listing]) -> BTreeMap<u32, usize> {
    let mut dist = BTreeMap::new();
    for listing in listings {
        if let Some(beds) = listing.bedrooms {
            if beds > 0 {
                *dist.entry(beds).or_insert(0) += 1;
            }
        }
    }
    dist
}

#[derive(Debug, Clone, Serialize)]
pub struct PriceRange {
    pub range: String,
    pub count: usize,
}

/// Fixed GH₵ price buckets for the market overview chart. Lower bound is
/// inclusive, upper bound exclusive.
pub fn price_ranges(listings: &[Listing]) -> Vec<PriceRange> {
    let buckets: &[(&str, f64, Option<f64>)] = &[
        ("Under GH₵5,000", 0.0, Some(5000.0)),
        ("GH₵5,000 - GH₵10,000", 5000.0, Some(10000.0)),
        ("GH₵10,000 - GH₵20,000", 10000.0, Some(20000.0)),
        ("GH₵20,000 - GH₵30,000", 20000.0, Some(30000.0)),
        ("Over GH₵30,000", 30000.0, None),
    ];

    buckets
        .iter()
        .map(|(label, min, max)| PriceRange {
            range: label.to_string(),
            count: listings
                .iter()
                .filter(|l| l.price >= *min && max.map_or(true, |m| l.price < m))
                .count(),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSummary {
    pub average_rent: i64,
    pub total_listings: usize,
    pub neighborhoods: usize,
    /// Mean bedroom count over bedroom-tagged listings, one decimal place.
    pub average_bedrooms: f64,
}

pub fn market_summary(listings: &[Listing]) -> MarketSummary {
    let total = listings.len();
    let average_rent = if total == 0 {
        0
    } else {
        (listings.iter().map(|l| l.price).sum::<f64>() / total as f64).round() as i64
    };

    let tagged: Vec<u32> = listings.iter().filter_map(|l| l.bedrooms).collect();
    let average_bedrooms = if tagged.is_empty() {
        0.0
    } else {
        let mean = tagged.iter().sum::<u32>() as f64 / tagged.len() as f64;
        (mean * 10.0).round() / 10.0
    };

    MarketSummary {
        average_rent,
        total_listings: total,
        neighborhoods: location_stats(listings).len(),
        average_bedrooms,
    }
}
