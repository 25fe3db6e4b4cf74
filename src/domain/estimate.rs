// src/domain/estimate.rs
//
// The price estimation cascade. Four tiers, first one with supporting
// listings wins:
//
//   1. exact location + bedroom matches (real min/avg/max)
//   2. location only, when the location has no bedroom data at all (±20%)
//   3. market-wide baseline for the bedroom count, scaled by how the
//      location prices relative to the whole market
//   4. price-per-bedroom extrapolation from the location's own listings
//
// Returns None only when the location never appears in the dataset.

use crate::dataset::Listing;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete reliability label. Not a statistical interval; just a signal of
/// how many comparable listings backed the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Confidence for a set of exact matches: 10+ high, 5+ medium, else low.
    pub fn for_sample(count: usize) -> Self {
        if count >= 10 {
            Confidence::High
        } else if count >= 5 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Confidence::High => "High Confidence",
            Confidence::Medium => "Medium Confidence",
            Confidence::Low => "Low Confidence",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One estimate. `low <= average <= high` holds by construction; all three
/// are rounded to whole cedis only here, never mid-computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEstimate {
    pub low: i64,
    pub average: i64,
    pub high: i64,
    pub count: usize,
    pub confidence: Confidence,
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// A listing "has bedroom data" when the count is present and non-zero.
fn has_bedroom_data(listing: &Listing) -> bool {
    matches!(listing.bedrooms, Some(b) if b > 0)
}

pub fn estimate_price(
    location: &str,
    bedrooms: u32,
    listings: &[Listing],
) -> Option<PriceEstimate> {
    let wanted = location.to_lowercase();

    // Tier 1: exact location + bedroom matches with a sane price.
    let mut exact: Vec<f64> = listings
        .iter()
        .filter(|l| {
            l.location.to_lowercase() == wanted && l.bedrooms == Some(bedrooms) && l.price > 0.0
        })
        .map(|l| l.price)
        .collect();

    if !exact.is_empty() {
        exact.sort_by(f64::total_cmp);
        let avg = mean(&exact);
        return Some(PriceEstimate {
            low: exact[0].round() as i64,
            average: avg.round() as i64,
            high: exact[exact.len() - 1].round() as i64,
            count: exact.len(),
            confidence: Confidence::for_sample(exact.len()),
        });
    }

    // No exact matches: fall back on everything priced at this location.
    // A location with zero listings means there is simply no data.
    let location_only: Vec<&Listing> = listings
        .iter()
        .filter(|l| l.location.to_lowercase() == wanted && l.price > 0.0)
        .collect();
    if location_only.is_empty() {
        return None;
    }

    let with_bedrooms: Vec<&Listing> = location_only
        .iter()
        .copied()
        .filter(|l| has_bedroom_data(l))
        .collect();

    // Tier 2: nothing at this location carries a bedroom count, so the best
    // we can do is the location average with a ±20% band.
    if with_bedrooms.is_empty() {
        let prices: Vec<f64> = location_only.iter().map(|l| l.price).collect();
        let avg = mean(&prices);
        return Some(PriceEstimate {
            low: (avg * 0.8).round() as i64,
            average: avg.round() as i64,
            high: (avg * 1.2).round() as i64,
            count: location_only.len(),
            confidence: Confidence::Low,
        });
    }

    // Tier 3: market-wide baseline for the requested bedroom count, scaled
    // by the location premium (how this area prices against the market).
    let mut baseline: Vec<f64> = listings
        .iter()
        .filter(|l| l.bedrooms == Some(bedrooms) && l.price > 0.0)
        .map(|l| l.price)
        .collect();

    if !baseline.is_empty() {
        baseline.sort_by(f64::total_cmp);
        let baseline_mean = mean(&baseline);

        let location_prices: Vec<f64> = with_bedrooms.iter().map(|l| l.price).collect();
        let location_avg = mean(&location_prices);

        let market_prices: Vec<f64> = listings
            .iter()
            .filter(|l| has_bedroom_data(l) && l.price > 0.0)
            .map(|l| l.price)
            .collect();
        let market_avg = mean(&market_prices);

        let premium = if market_avg == 0.0 {
            1.0
        } else {
            location_avg / market_avg
        };

        let estimated = baseline_mean * premium;

        // Rank-based 10th/90th percentiles of the baseline, scaled by the
        // premium; the final band is at least ±15% around the estimate.
        let n = baseline.len();
        let p10 = baseline[(((n as f64) * 0.1).floor() as usize).min(n - 1)];
        let p90 = baseline[(((n as f64) * 0.9).floor() as usize).min(n - 1)];
        let low = (p10 * premium).min(estimated * 0.85);
        let high = (p90 * premium).max(estimated * 1.15);

        return Some(PriceEstimate {
            low: low.round() as i64,
            average: estimated.round() as i64,
            high: high.round() as i64,
            // How many comparable-bedroom listings informed the baseline,
            // not how many listings the location has.
            count: n,
            confidence: Confidence::Low,
        });
    }

    // Tier 4: no market data for this bedroom count anywhere. Extrapolate
    // from the location's own price per bedroom.
    let total_price: f64 = with_bedrooms.iter().map(|l| l.price).sum();
    let total_beds: u32 = with_bedrooms.iter().filter_map(|l| l.bedrooms).sum();
    let price_per_bedroom = total_price / total_beds as f64;
    let estimated = price_per_bedroom * f64::from(bedrooms);

    Some(PriceEstimate {
        low: (estimated * 0.8).round() as i64,
        average: estimated.round() as i64,
        high: (estimated * 1.2).round() as i64,
        count: with_bedrooms.len(),
        confidence: Confidence::Low,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_fixtures::listing;

    #[test]
    fn exact_matches_use_real_min_and_max() {
        let listings = vec![
            listing("Osu", Some(2), 4000.0),
            listing("Osu", Some(2), 6000.0),
            listing("Osu", Some(2), 5000.0),
        ];
        let est = estimate_price("Osu", 2, &listings).unwrap();
        assert_eq!(
            est,
            PriceEstimate {
                low: 4000,
                average: 5000,
                high: 6000,
                count: 3,
                confidence: Confidence::Low,
            }
        );
    }

    #[test]
    fn location_match_is_case_insensitive() {
        let listings = vec![listing("East Legon", Some(3), 12000.0)];
        let est = estimate_price("east legon", 3, &listings).unwrap();
        assert_eq!(est.average, 12000);
        assert_eq!(est.count, 1);
    }

    #[test]
    fn confidence_boundaries_are_exact() {
        for (n, expected) in [
            (4, Confidence::Low),
            (5, Confidence::Medium),
            (9, Confidence::Medium),
            (10, Confidence::High),
            (12, Confidence::High),
        ] {
            let listings: Vec<_> = (0..n).map(|_| listing("Osu", Some(2), 5000.0)).collect();
            let est = estimate_price("Osu", 2, &listings).unwrap();
            assert_eq!(est.confidence, expected, "count {n}");
            assert_eq!(est.count, n);
        }
    }

    #[test]
    fn non_positive_prices_are_excluded() {
        let listings = vec![
            listing("Osu", Some(2), 0.0),
            listing("Osu", Some(2), -150.0),
            listing("Osu", Some(2), 4200.0),
        ];
        let est = estimate_price("Osu", 2, &listings).unwrap();
        assert_eq!(est.count, 1);
        assert_eq!(est.low, 4200);
        assert_eq!(est.high, 4200);
    }

    #[test]
    fn unknown_location_yields_none() {
        let listings = vec![listing("Osu", Some(2), 4000.0)];
        assert!(estimate_price("Kumasi", 3, &listings).is_none());
    }

    #[test]
    fn location_with_only_unpriced_listings_yields_none() {
        let listings = vec![listing("Osu", Some(2), 0.0)];
        assert!(estimate_price("Osu", 2, &listings).is_none());
    }

    #[test]
    fn tier2_bands_location_average_by_twenty_percent() {
        // Location exists but nothing there carries a bedroom count.
        let listings = vec![
            listing("Kasoa", None, 1000.0),
            listing("Kasoa", None, 2000.0),
        ];
        let est = estimate_price("Kasoa", 2, &listings).unwrap();
        assert_eq!(est.low, 1200);
        assert_eq!(est.average, 1500);
        assert_eq!(est.high, 1800);
        assert_eq!(est.count, 2);
        assert_eq!(est.confidence, Confidence::Low);
    }

    #[test]
    fn tier3_scales_market_baseline_by_location_premium() {
        // Labone has bedroom data but no 2-bed listings; the market does.
        let listings = vec![
            listing("Labone", Some(1), 2000.0),
            listing("Osu", Some(2), 4000.0),
            listing("Osu", Some(2), 6000.0),
        ];
        let est = estimate_price("Labone", 2, &listings).unwrap();
        // baseline mean 5000, location avg 2000, market avg 4000 -> premium
        // 0.5, estimate 2500. Scaled percentile band [2000, 3000] already
        // covers the ±15% band [2125, 2875], so it wins on both sides.
        assert_eq!(est.average, 2500);
        assert_eq!(est.low, 2000);
        assert_eq!(est.high, 3000);
        // Count reflects the market baseline, not the location.
        assert_eq!(est.count, 2);
        assert_eq!(est.confidence, Confidence::Low);
    }

    #[test]
    fn tier4_extrapolates_price_per_bedroom() {
        // Nobody in the market has a 4-bed listing.
        let listings = vec![
            listing("Labone", Some(1), 2000.0),
            listing("Labone", Some(2), 3000.0),
        ];
        let est = estimate_price("Labone", 4, &listings).unwrap();
        // 5000 total over 3 bedrooms = 1666.67/bed, times 4 = 6666.67.
        assert_eq!(est.average, 6667);
        assert_eq!(est.low, 5333);
        assert_eq!(est.high, 8000);
        assert_eq!(est.count, 2);
        assert_eq!(est.confidence, Confidence::Low);
    }

    #[test]
    fn band_ordering_holds_across_tiers() {
        let listings = vec![
            listing("Osu", Some(2), 4500.0),
            listing("Osu", Some(3), 7000.0),
            listing("Labone", Some(1), 2500.0),
            listing("Kasoa", None, 900.0),
            listing("Spintex", Some(2), 3800.0),
        ];
        for (loc, beds) in [
            ("Osu", 2),
            ("Osu", 5),
            ("Labone", 2),
            ("Kasoa", 1),
            ("Spintex", 4),
        ] {
            if let Some(est) = estimate_price(loc, beds, &listings) {
                assert!(
                    est.low <= est.average && est.average <= est.high,
                    "{loc}/{beds}: {est:?}"
                );
            }
        }
    }
}
