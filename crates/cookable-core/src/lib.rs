//! # cookable-core
//!
//! Foundation crate for the Cookable recommendation core.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod recipe;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CookableConfig;
pub use errors::{CookableError, CookableResult};
pub use models::{ClusterSummary, MatchResult};
pub use recipe::{Difficulty, Rating, Recipe};
