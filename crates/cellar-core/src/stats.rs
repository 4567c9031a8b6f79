//! The statistics contract: reducing a beer collection to summary figures.
//!
//! The same contract is implemented twice: here as an in-memory
//! reduction over a fetched snapshot (the client-side form), and in the
//! store as per-query aggregation over the persisted collection. Both
//! sides must produce identical results for the same snapshot; the
//! integration tests assert that equivalence.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::beer::Beer;

/// The reduced aggregate view of a beer collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerStats {
    pub total_beers: u64,
    pub drank_beers: u64,
    pub pending_beers: u64,
    pub rated_beers: u64,
    /// Mean of present ratings rounded to 1 decimal; `0` when nothing is
    /// rated.
    pub average_rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_style: Option<TopStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_brewery: Option<TopBrewery>,
}

/// The most frequent style and its record count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopStyle {
    pub style: String,
    pub count: u64,
}

/// The most frequent brewery and its record count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopBrewery {
    pub brewery: String,
    pub count: u64,
}

/// Reduce a snapshot of records to its statistics summary.
pub fn compute_stats(beers: &[Beer]) -> BeerStats {
    let total_beers = beers.len() as u64;
    let drank_beers = beers.iter().filter(|b| b.drank).count() as u64;
    let pending_beers = pending_count(total_beers, drank_beers);

    let ratings: Vec<f64> = beers
        .iter()
        .filter_map(|b| b.rating.map(f64::from))
        .collect();
    let rated_beers = ratings.len() as u64;
    let average_rating = if ratings.is_empty() {
        0.0
    } else {
        round1(ratings.iter().sum::<f64>() / ratings.len() as f64)
    };

    let top_style = top_by_frequency(beers.iter().map(|b| b.style.as_str()))
        .map(|(style, count)| TopStyle { style, count });
    let top_brewery = top_by_frequency(beers.iter().map(|b| b.brewery.as_str()))
        .map(|(brewery, count)| TopBrewery { brewery, count });

    BeerStats {
        total_beers,
        drank_beers,
        pending_beers,
        rated_beers,
        average_rating,
        top_style,
        top_brewery,
    }
}

/// The most frequent value, or `None` for an empty input.
///
/// Ties resolve to the lexicographically smallest value.
pub fn top_by_frequency<'a>(values: impl IntoIterator<Item = &'a str>) -> Option<(String, u64)> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    // BTreeMap iterates in key order, so requiring a strictly higher
    // count keeps the lexicographically smallest value on ties.
    let mut best: Option<(&str, u64)> = None;
    for (value, count) in counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }

    best.map(|(value, count)| (value.to_string(), count))
}

/// The pending count is the arithmetic complement of the drank count,
/// never a second filter, so the pair stays consistent for a single
/// snapshot. When the two counts come from separate queries a writer
/// may land between them; the subtraction saturates so skew can never
/// turn into a wrapped count.
pub fn pending_count(total: u64, drank: u64) -> u64 {
    total.saturating_sub(drank)
}

/// Round half away from zero to 1 decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Share of total as a percentage; `0` for an empty collection.
pub fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
