//! Default values shared by the config structs.

/// Default number of ingredient-similarity clusters.
pub const DEFAULT_N_CLUSTERS: usize = 5;

/// Default k-means iteration cap.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Default convergence tolerance on centroid movement.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Fixed RNG seed so clustering is reproducible across runs.
pub const DEFAULT_SEED: u64 = 42;

/// Example recipe names retained per cluster summary.
pub const DEFAULT_EXAMPLE_LIMIT: usize = 3;

/// Default cap on missing ingredients for a feasible recipe.
pub const DEFAULT_MAX_MISSING: usize = 2;

/// Default result list length.
pub const DEFAULT_TOP_N: usize = 5;

/// Cooking-time ceiling (minutes) against which the time factor is
/// normalized. Recipes at or above the ceiling score 0 on the time factor.
pub const DEFAULT_TIME_CEILING_MINUTES: u32 = 120;
