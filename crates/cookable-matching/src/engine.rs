//! MatchingEngine: implements IRecipeMatcher over a trained model.
//!
//! Pure function of (user ingredients, model, parameters): no internal
//! state across calls, no mutation of the shared model, safely re-entrant.

use std::collections::BTreeSet;

use tracing::{debug, info};

use cookable_clustering::TrainedModel;
use cookable_core::config::MatchingConfig;
use cookable_core::errors::{CookableResult, InputError};
use cookable_core::traits::IRecipeMatcher;
use cookable_core::MatchResult;

use crate::feasibility::{self, IngredientSplit};
use crate::ranking::{self, ScorerWeights};

/// Ranks catalog recipes against a user's ingredient set, blending the
/// four-factor base score with the cluster-popularity boost.
pub struct MatchingEngine<'a> {
    model: &'a TrainedModel,
    config: MatchingConfig,
    weights: ScorerWeights,
}

impl<'a> MatchingEngine<'a> {
    pub fn new(model: &'a TrainedModel, config: MatchingConfig) -> Self {
        Self {
            model,
            config,
            weights: ScorerWeights::default(),
        }
    }

    /// Match with the configured `max_missing` and `top_n` defaults.
    pub fn find_default(
        &self,
        user_ingredients: &BTreeSet<String>,
    ) -> CookableResult<Vec<MatchResult>> {
        self.find_matching_recipes(user_ingredients, self.config.max_missing, self.config.top_n)
    }

    fn build_result(
        &self,
        recipe: &cookable_core::Recipe,
        split: IngredientSplit,
        max_missing: usize,
    ) -> MatchResult {
        let breakdown = ranking::scorer::score(
            recipe,
            &split,
            self.model.popularity(recipe.cluster_id),
            max_missing,
            self.config.time_ceiling_minutes,
            &self.weights,
        );

        MatchResult {
            name: recipe.name.clone(),
            rating: recipe.rating,
            cooking_time_minutes: recipe.cooking_time_minutes,
            difficulty: recipe.difficulty,
            instructions: recipe.instructions.clone(),
            cluster_id: recipe.cluster_id,
            all_ingredients: recipe.ingredients.clone(),
            num_matching: split.matching.len(),
            num_missing: split.missing.len(),
            matching_ingredients: split.matching,
            missing_ingredients: split.missing,
            base_score: breakdown.base_score,
            cluster_boost: breakdown.cluster_boost,
            final_score: breakdown.final_score,
        }
    }
}

impl IRecipeMatcher for MatchingEngine<'_> {
    fn find_matching_recipes(
        &self,
        user_ingredients: &BTreeSet<String>,
        max_missing: usize,
        top_n: usize,
    ) -> CookableResult<Vec<MatchResult>> {
        if user_ingredients.is_empty() {
            return Err(InputError::EmptyIngredients.into());
        }
        if top_n == 0 {
            return Err(InputError::ZeroTopN.into());
        }

        let user = feasibility::normalize_user_ingredients(user_ingredients);
        debug!(
            ingredients = user.len(),
            max_missing, top_n, "matching query"
        );

        // Feasibility filter, catalog order preserved.
        let results: Vec<MatchResult> = self
            .model
            .recipes()
            .iter()
            .filter_map(|recipe| {
                let split = feasibility::split_ingredients(recipe, &user)?;
                (split.missing.len() <= max_missing)
                    .then(|| self.build_result(recipe, split, max_missing))
            })
            .collect();

        let feasible = results.len();
        let ranked = ranking::sort_and_truncate(results, top_n);

        info!(feasible, returned = ranked.len(), "matching complete");

        Ok(ranked)
    }
}
