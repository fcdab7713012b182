//! RecipeClusterer: fit the catalog, expose assignments and summaries.

use std::collections::BTreeMap;

use tracing::{debug, info};

use cookable_core::config::ClusteringConfig;
use cookable_core::constants::MAX_RATING;
use cookable_core::errors::{CookableResult, DataError, StateError};
use cookable_core::{ClusterSummary, Recipe};

use crate::kmeans::{self, KMeansParams};
use crate::model::TrainedModel;
use crate::vocabulary::IngredientVocabulary;

/// Partitions the catalog into ingredient-similarity groups and summarizes
/// each group's quality signal.
///
/// Two states: unfit and fit. `fit` is idempotent — refitting replaces the
/// assignments and the summary table as a whole.
#[derive(Debug, Default)]
pub struct RecipeClusterer {
    config: ClusteringConfig,
    fitted: Option<TrainedModel>,
}

impl RecipeClusterer {
    pub fn new(config: ClusteringConfig) -> Self {
        Self {
            config,
            fitted: None,
        }
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Train the grouping over the catalog's ingredient composition.
    ///
    /// Errors with `DataError::EmptyCatalog` on an empty catalog and
    /// `DataError::NoIngredientSignal` when every recipe has an empty
    /// ingredient list. `n_clusters` is clamped to the catalog size.
    pub fn fit(&mut self, catalog: Vec<Recipe>) -> CookableResult<&TrainedModel> {
        let model = fit_catalog(catalog, self.config.clone())?;
        Ok(self.fitted.insert(model))
    }

    /// Summary table keyed by cluster id, ascending.
    ///
    /// Requires a prior `fit`; errors with `StateError::NotFitted` otherwise.
    pub fn cluster_summary(&self) -> CookableResult<&BTreeMap<usize, ClusterSummary>> {
        Ok(self.model()?.summaries())
    }

    /// Borrow the fitted model.
    pub fn model(&self) -> CookableResult<&TrainedModel> {
        self.fitted
            .as_ref()
            .ok_or_else(|| StateError::NotFitted.into())
    }

    /// Take the fitted model out of the clusterer, e.g. to hand it to a
    /// `ModelCache` for sharing.
    pub fn into_model(self) -> CookableResult<TrainedModel> {
        self.fitted.ok_or_else(|| StateError::NotFitted.into())
    }
}

/// One-call fit: the common path for hosts that train once at startup and
/// share the returned model across queries.
pub fn fit_catalog(
    mut catalog: Vec<Recipe>,
    config: ClusteringConfig,
) -> CookableResult<TrainedModel> {
    if catalog.is_empty() {
        return Err(DataError::EmptyCatalog.into());
    }

    let vocabulary = IngredientVocabulary::build(&catalog);
    if vocabulary.is_empty() {
        return Err(DataError::NoIngredientSignal.into());
    }

    let k = config.n_clusters.clamp(1, catalog.len());
    let vectors: Vec<Vec<f64>> = catalog.iter().map(|r| vocabulary.encode(r)).collect();

    debug!(
        recipes = catalog.len(),
        dims = vocabulary.len(),
        k,
        seed = config.seed,
        "encoding complete, running k-means"
    );

    let result = kmeans::fit(
        &vectors,
        &KMeansParams {
            k,
            max_iterations: config.max_iterations,
            tolerance: config.tolerance,
            seed: config.seed,
        },
    );

    for (recipe, &label) in catalog.iter_mut().zip(&result.labels) {
        recipe.cluster_id = Some(label);
    }

    let summaries = summarize(&catalog, config.example_limit);

    info!(
        recipes = catalog.len(),
        clusters = summaries.len(),
        iterations = result.iterations,
        "clustering fit complete"
    );

    Ok(TrainedModel::new(catalog, summaries, vocabulary, k))
}

/// Per-cluster member count, mean rating, normalized popularity, and example
/// names in first-encounter order.
fn summarize(catalog: &[Recipe], example_limit: usize) -> BTreeMap<usize, ClusterSummary> {
    let mut summaries: BTreeMap<usize, ClusterSummary> = BTreeMap::new();
    let mut rating_sums: BTreeMap<usize, f64> = BTreeMap::new();

    for recipe in catalog {
        // Every recipe has an assignment by the time this runs.
        let Some(id) = recipe.cluster_id else { continue };
        let entry = summaries.entry(id).or_insert_with(|| ClusterSummary {
            num_recipes: 0,
            avg_rating: 0.0,
            popularity_score: 0.0,
            example_recipes: Vec::new(),
        });
        entry.num_recipes += 1;
        if entry.example_recipes.len() < example_limit {
            entry.example_recipes.push(recipe.name.clone());
        }
        *rating_sums.entry(id).or_insert(0.0) += recipe.rating.value();
    }

    for (id, summary) in summaries.iter_mut() {
        summary.avg_rating = rating_sums[id] / summary.num_recipes as f64;
        summary.popularity_score = summary.avg_rating / MAX_RATING;
    }

    summaries
}
