use serde::{Deserialize, Serialize};

use crate::errors::CookableResult;

/// One hit from a remote ingredient-based recipe search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalRecipeHit {
    /// Provider-side recipe id.
    pub id: u64,
    pub title: String,
    /// How many of the queried ingredients the hit uses.
    pub used_ingredient_count: usize,
    /// How many additional ingredients the hit needs.
    pub missed_ingredient_count: usize,
}

/// Third-party ingredient-search client. Consulted by the hosting
/// application as a fallback when the local catalog has nothing to offer;
/// the matcher itself never calls out.
pub trait IIngredientSearch: Send + Sync {
    /// Search remote recipes by ingredient list, minimizing missing
    /// ingredients, returning at most `number` hits.
    fn find_by_ingredients(
        &self,
        ingredients: &[String],
        number: usize,
    ) -> CookableResult<Vec<ExternalRecipeHit>>;
}
