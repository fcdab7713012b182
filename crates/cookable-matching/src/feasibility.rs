//! Feasibility filtering: staple-aware ingredient set comparison.
//!
//! Pantry staples are stripped from both sides before any counting, so
//! they are never matched and never missing.

use std::collections::BTreeSet;

use cookable_core::constants::is_staple;
use cookable_core::Recipe;

/// A recipe's have/need split against a user ingredient set.
#[derive(Debug, Clone)]
pub struct IngredientSplit {
    /// Required ingredients the user has.
    pub matching: BTreeSet<String>,
    /// Required ingredients the user lacks.
    pub missing: BTreeSet<String>,
    /// Size of the staple-adjusted required set.
    pub required_len: usize,
}

/// Normalize the user's ingredient set and drop staples.
pub fn normalize_user_ingredients(user_ingredients: &BTreeSet<String>) -> BTreeSet<String> {
    user_ingredients
        .iter()
        .map(|i| Recipe::normalize_ingredient(i))
        .filter(|i| !is_staple(i))
        .collect()
}

/// Split a recipe's staple-adjusted required set against the (already
/// normalized) user set. Returns `None` for recipes whose required set is
/// empty — nothing to match on.
pub fn split_ingredients(recipe: &Recipe, user: &BTreeSet<String>) -> Option<IngredientSplit> {
    let required = recipe.required_ingredients();
    if required.is_empty() {
        return None;
    }

    let required_len = required.len();
    let (matching, missing): (BTreeSet<String>, BTreeSet<String>) =
        required.into_iter().partition(|i| user.contains(i));

    Some(IngredientSplit {
        matching,
        missing,
        required_len,
    })
}
