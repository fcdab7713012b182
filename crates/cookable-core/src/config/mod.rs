//! Configuration for the Cookable core.
//!
//! One struct per subsystem, all fields defaulted so a partial TOML section
//! (or none at all) yields a working configuration.

pub mod defaults;

mod clustering_config;
mod matching_config;

pub use clustering_config::ClusteringConfig;
pub use matching_config::MatchingConfig;

use serde::{Deserialize, Serialize};

use crate::errors::CookableResult;

/// Top-level configuration, one section per subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CookableConfig {
    pub clustering: ClusteringConfig,
    pub matching: MatchingConfig,
}

impl CookableConfig {
    /// Parse a TOML document handed over by the hosting process.
    ///
    /// The core never reads config files itself; the host decides where
    /// configuration lives and passes the contents in.
    pub fn from_toml_str(input: &str) -> CookableResult<Self> {
        Ok(toml::from_str(input)?)
    }
}
