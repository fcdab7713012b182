//! # cookable-clustering
//!
//! Ingredient-similarity clustering over the recipe catalog.
//! Bag-of-ingredients encoding → seeded k-means → per-cluster popularity.
//!
//! The catalog is fitted once per snapshot; the resulting [`TrainedModel`]
//! is immutable and shared read-only with the matcher.

pub mod clusterer;
pub mod kmeans;
pub mod model;
pub mod vocabulary;

pub use clusterer::{fit_catalog, RecipeClusterer};
pub use model::{ModelCache, TrainedModel};
pub use vocabulary::IngredientVocabulary;
