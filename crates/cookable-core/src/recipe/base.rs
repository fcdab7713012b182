use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::difficulty::Difficulty;
use super::rating::Rating;
use crate::constants::is_staple;

/// A catalog entry. Immutable after load, except for `cluster_id`, which
/// the clusterer assigns at fit time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Catalog-unique recipe name.
    pub name: String,
    /// Ingredient names, catalog order preserved for display. Matching
    /// always goes through the normalized set views below.
    pub ingredients: Vec<String>,
    /// Aggregate user rating on the 0–5 scale.
    pub rating: Rating,
    /// Cooking time in minutes.
    pub cooking_time_minutes: u32,
    /// Difficulty level.
    pub difficulty: Difficulty,
    /// Free-text preparation instructions.
    pub instructions: String,
    /// Cluster assignment; `None` until the clusterer has been fitted.
    #[serde(default)]
    pub cluster_id: Option<usize>,
}

impl Recipe {
    /// Normalize an ingredient name for matching: trimmed, lowercased.
    pub fn normalize_ingredient(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// The recipe's ingredients as a normalized set.
    pub fn ingredient_set(&self) -> BTreeSet<String> {
        self.ingredients
            .iter()
            .map(|i| Self::normalize_ingredient(i))
            .collect()
    }

    /// The ingredients that count for matching: normalized set minus
    /// pantry staples.
    pub fn required_ingredients(&self) -> BTreeSet<String> {
        let mut set = self.ingredient_set();
        set.retain(|i| !is_staple(i));
        set
    }
}
