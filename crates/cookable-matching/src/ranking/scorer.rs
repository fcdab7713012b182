//! Multi-factor base scorer and cluster boost (4 + 2 factors).
//!
//! Base factors: ingredient match ratio, missing-ingredient penalty,
//! cooking-time factor, rating. Boost: rating re-weighted plus cluster
//! popularity. Final: 0.6·base + 0.4·boost.

use cookable_core::Recipe;

use crate::feasibility::IngredientSplit;

/// Blend weight of the base score in the final score.
const W_BASE: f64 = 0.60;
/// Blend weight of the cluster boost in the final score.
const W_BOOST: f64 = 0.40;
/// Rating contribution inside the cluster boost.
const W_BOOST_RATING: f64 = 0.20;
/// Cluster-popularity contribution inside the cluster boost.
const W_BOOST_POPULARITY: f64 = 0.20;

/// Weights for the 4 base-score factors.
#[derive(Debug, Clone)]
pub struct ScorerWeights {
    pub match_ratio: f64,
    pub missing_penalty: f64,
    pub time_factor: f64,
    pub rating_factor: f64,
}

impl Default for ScorerWeights {
    fn default() -> Self {
        Self {
            match_ratio: 0.40,
            missing_penalty: 0.30,
            time_factor: 0.10,
            rating_factor: 0.20,
        }
    }
}

/// The three-tier score blend for one feasible recipe.
#[derive(Debug, Clone, Copy)]
pub struct ScoreBreakdown {
    /// Weighted four-factor score in [0, 1].
    pub base_score: f64,
    /// Cluster-derived boost in [0, 0.4].
    pub cluster_boost: f64,
    /// 0.6·base_score + 0.4·cluster_boost.
    pub final_score: f64,
}

/// Score one feasible recipe.
///
/// `popularity` is the recipe's cluster popularity in [0, 1];
/// `max_missing` shapes the missing-penalty curve.
pub fn score(
    recipe: &Recipe,
    split: &IngredientSplit,
    popularity: f64,
    max_missing: usize,
    time_ceiling_minutes: u32,
    weights: &ScorerWeights,
) -> ScoreBreakdown {
    // Factor 1: Match ratio — share of required ingredients the user has.
    let f_match = split.matching.len() as f64 / split.required_len as f64;

    // Factor 2: Missing penalty — 0 missing scores 1.0, each extra missing
    // ingredient steps linearly toward 0.
    let f_missing =
        (1.0 - split.missing.len() as f64 / (max_missing as f64 + 1.0)).clamp(0.0, 1.0);

    // Factor 3: Time — linear decay against the reference ceiling.
    let f_time =
        (1.0 - f64::from(recipe.cooking_time_minutes) / f64::from(time_ceiling_minutes.max(1)))
            .clamp(0.0, 1.0);

    // Factor 4: Rating, normalized to [0, 1].
    let f_rating = recipe.rating.normalized();

    let base_score = weights.match_ratio * f_match
        + weights.missing_penalty * f_missing
        + weights.time_factor * f_time
        + weights.rating_factor * f_rating;

    let cluster_boost = W_BOOST_RATING * f_rating + W_BOOST_POPULARITY * popularity;

    ScoreBreakdown {
        base_score,
        cluster_boost,
        final_score: W_BASE * base_score + W_BOOST * cluster_boost,
    }
}
