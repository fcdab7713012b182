//! Deterministic ordering of scored results.

pub mod scorer;

pub use scorer::{ScoreBreakdown, ScorerWeights};

use std::cmp::Ordering;

use cookable_core::MatchResult;

/// Sort descending by final score; ties break by higher rating, then lower
/// cooking time. The sort is stable, so remaining ties keep catalog
/// insertion order. Truncates to `top_n`.
pub fn sort_and_truncate(mut results: Vec<MatchResult>, top_n: usize) -> Vec<MatchResult> {
    results.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                b.rating
                    .value()
                    .partial_cmp(&a.rating.value())
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| a.cooking_time_minutes.cmp(&b.cooking_time_minutes))
    });
    results.truncate(top_n);
    results
}
