//! Engine configuration and loading.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::engine::RankEngine;
use crate::error::RankError;

/// Precision used when no limit is configured.
pub const DEFAULT_LIMIT: usize = 10;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Rank(#[from] RankError),
}

/// Rank engine configuration.
///
/// ```toml
/// # digits of precision used by next/prev
/// limit = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RankConfig {
    /// Digits of precision used when stepping to a neighbour.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    return DEFAULT_LIMIT;
}

impl Default for RankConfig {
    fn default() -> RankConfig {
        return RankConfig { limit: DEFAULT_LIMIT };
    }
}

impl RankConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<RankConfig, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        return RankConfig::from_toml(&content);
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<RankConfig, ConfigError> {
        let config: RankConfig = toml::from_str(content)?;
        return Ok(config);
    }

    /// Build the engine this configuration describes.
    pub fn build(&self) -> Result<RankEngine, ConfigError> {
        return Ok(RankEngine::from_config(self)?);
    }
}
