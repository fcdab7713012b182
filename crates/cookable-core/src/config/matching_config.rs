use serde::{Deserialize, Serialize};

use super::defaults;

/// Matching subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Inclusive cap on missing ingredients for a feasible recipe.
    pub max_missing: usize,
    /// Result list length cap.
    pub top_n: usize,
    /// Cooking-time ceiling (minutes) for time-factor normalization.
    pub time_ceiling_minutes: u32,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            max_missing: defaults::DEFAULT_MAX_MISSING,
            top_n: defaults::DEFAULT_TOP_N,
            time_ceiling_minutes: defaults::DEFAULT_TIME_CEILING_MINUTES,
        }
    }
}
