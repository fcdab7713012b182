use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::recipe::{Difficulty, Rating};

/// One ranked result row. Produced per query, never persisted.
///
/// Carries everything the presentation layer renders: display fields,
/// the have/need ingredient split, and the three-tier score blend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub name: String,
    pub rating: Rating,
    pub cooking_time_minutes: u32,
    pub difficulty: Difficulty,
    pub instructions: String,
    pub cluster_id: Option<usize>,
    /// Full ingredient list in recipe display order.
    pub all_ingredients: Vec<String>,
    /// Required ingredients the user has. Staples excluded.
    pub matching_ingredients: BTreeSet<String>,
    /// Required ingredients the user lacks. Staples excluded.
    pub missing_ingredients: BTreeSet<String>,
    pub num_matching: usize,
    pub num_missing: usize,
    /// Weighted four-factor score in [0, 1].
    pub base_score: f64,
    /// Cluster-derived boost in [0, 0.4].
    pub cluster_boost: f64,
    /// Blend: 0.6·base_score + 0.4·cluster_boost.
    pub final_score: f64,
}
