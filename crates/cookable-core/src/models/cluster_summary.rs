use serde::{Deserialize, Serialize};

/// Per-cluster quality summary, recomputed on every fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    /// Number of member recipes. At least 1 for every emitted cluster.
    pub num_recipes: usize,
    /// Mean member rating on the 0–5 scale.
    pub avg_rating: f64,
    /// `avg_rating` normalized to [0, 1].
    pub popularity_score: f64,
    /// Member names in first-encounter order, capped at the configured
    /// example limit.
    pub example_recipes: Vec<String>,
}
