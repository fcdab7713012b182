use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::MAX_RATING;

/// Recipe rating clamped to [0.0, 5.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64")]
pub struct Rating(f64);

impl Rating {
    /// Create a new Rating, clamping to [0.0, 5.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, MAX_RATING))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Rating normalized to [0.0, 1.0].
    pub fn normalized(self) -> f64 {
        self.0 / MAX_RATING
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(0.0)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl From<f64> for Rating {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Rating> for f64 {
    fn from(r: Rating) -> Self {
        r.0
    }
}
