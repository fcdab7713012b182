//! The fit artifact and its process-wide holder.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use cookable_core::{ClusterSummary, Recipe};

use crate::vocabulary::IngredientVocabulary;

/// Immutable output of a successful fit: the catalog with cluster
/// assignments, the per-cluster summary table, and the frozen vocabulary.
///
/// Shared read-only across concurrent matching queries; nothing here is
/// mutated after construction.
#[derive(Debug, Clone)]
pub struct TrainedModel {
    recipes: Vec<Recipe>,
    summaries: BTreeMap<usize, ClusterSummary>,
    vocabulary: IngredientVocabulary,
    n_clusters: usize,
}

impl TrainedModel {
    pub(crate) fn new(
        recipes: Vec<Recipe>,
        summaries: BTreeMap<usize, ClusterSummary>,
        vocabulary: IngredientVocabulary,
        n_clusters: usize,
    ) -> Self {
        Self {
            recipes,
            summaries,
            vocabulary,
            n_clusters,
        }
    }

    /// The catalog in insertion order. Every recipe carries a cluster id.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Summary table keyed by cluster id, ascending.
    pub fn summaries(&self) -> &BTreeMap<usize, ClusterSummary> {
        &self.summaries
    }

    pub fn vocabulary(&self) -> &IngredientVocabulary {
        &self.vocabulary
    }

    /// Effective cluster count after clamping to catalog size.
    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }

    /// Popularity score for a cluster. Unassigned or unknown ids read 0.0,
    /// so scoring stays total.
    pub fn popularity(&self, cluster_id: Option<usize>) -> f64 {
        cluster_id
            .and_then(|id| self.summaries.get(&id))
            .map(|s| s.popularity_score)
            .unwrap_or(0.0)
    }
}

/// Process-wide holder for the current model.
///
/// A refit builds a fresh [`TrainedModel`] and swaps the whole artifact in
/// one `store`; in-flight readers keep the snapshot they loaded and never
/// observe a half-updated assignment.
#[derive(Debug)]
pub struct ModelCache {
    current: RwLock<Arc<TrainedModel>>,
}

impl ModelCache {
    pub fn new(model: TrainedModel) -> Self {
        Self {
            current: RwLock::new(Arc::new(model)),
        }
    }

    /// Snapshot the current model.
    pub fn load(&self) -> Arc<TrainedModel> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Atomically replace the current model.
    pub fn store(&self, model: TrainedModel) {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::new(model);
    }
}
