//! # cookable-matching
//!
//! Ranks catalog recipes against a user's ingredient set.
//!
//! Pipeline: staple-aware feasibility filter → four-factor base score →
//! cluster-popularity boost → deterministic sort → top-N truncation.

pub mod engine;
pub mod feasibility;
pub mod ranking;

pub use engine::MatchingEngine;
