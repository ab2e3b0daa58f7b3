//! Errors raised while loading authorization configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a
/// [`StrategyRegistry`](crate::authorization::StrategyRegistry) from config.
#[derive(Debug, Error)]
pub enum RegistryConfigError {
  #[error("Failed to read authorization config '{}': {source}", .path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("Invalid authorization config: {0}")]
  Parse(#[from] toml::de::Error),
}
