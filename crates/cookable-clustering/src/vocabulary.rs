//! Deterministic bag-of-ingredients encoding.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use cookable_core::Recipe;

/// Fixed ingredient vocabulary, derived once per catalog snapshot and
/// frozen for the session.
///
/// Dimensions are sorted lexicographically, so the same catalog always
/// encodes identically — and therefore clusters identically — across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientVocabulary {
    terms: Vec<String>,
}

impl IngredientVocabulary {
    /// Collect every distinct normalized ingredient across the catalog.
    pub fn build(catalog: &[Recipe]) -> Self {
        let terms: BTreeSet<String> = catalog.iter().flat_map(|r| r.ingredient_set()).collect();
        Self {
            terms: terms.into_iter().collect(),
        }
    }

    /// Number of dimensions.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when the catalog carried no ingredients at all.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The vocabulary terms, sorted.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Membership vector: 1.0 per vocabulary term the recipe contains.
    pub fn encode(&self, recipe: &Recipe) -> Vec<f64> {
        let set = recipe.ingredient_set();
        self.terms
            .iter()
            .map(|t| if set.contains(t) { 1.0 } else { 0.0 })
            .collect()
    }
}
