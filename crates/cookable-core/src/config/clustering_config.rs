use serde::{Deserialize, Serialize};

use super::defaults;

/// Clustering subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Target number of clusters. Clamped to catalog size at fit time.
    pub n_clusters: usize,
    /// Iteration cap for k-means.
    pub max_iterations: usize,
    /// Convergence tolerance on total centroid movement.
    pub tolerance: f64,
    /// RNG seed for centroid initialization.
    pub seed: u64,
    /// Example recipe names retained per cluster summary.
    pub example_limit: usize,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            n_clusters: defaults::DEFAULT_N_CLUSTERS,
            max_iterations: defaults::DEFAULT_MAX_ITERATIONS,
            tolerance: defaults::DEFAULT_TOLERANCE,
            seed: defaults::DEFAULT_SEED,
            example_limit: defaults::DEFAULT_EXAMPLE_LIMIT,
        }
    }
}
