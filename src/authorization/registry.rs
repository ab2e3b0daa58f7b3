//! Host to strategy mapping.
//!
//! The registry is built once, typically at startup, and shared by reference
//! with every [`AuthorizationDispatcher`](super::AuthorizationDispatcher). It
//! is never modified while requests are being served.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::strategy::AuthorizationStrategy;
use crate::consts::GITHUB_HOST;
use crate::error::RegistryConfigError;

/// Serialized form of a [`StrategyRegistry`].
///
/// ```toml
/// default = "passthrough"
///
/// [hosts]
/// "github.com" = "token"
/// "git.example.com" = "token"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
  /// Strategy for hosts without an entry
  #[serde(default)]
  pub default: AuthorizationStrategy,

  /// Exact host name to strategy
  #[serde(default)]
  pub hosts: HashMap<String, AuthorizationStrategy>,
}

/// Immutable mapping from exact host name to [`AuthorizationStrategy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyRegistry {
  hosts: HashMap<String, AuthorizationStrategy>,
  default: AuthorizationStrategy,
}

impl Default for StrategyRegistry {
  fn default() -> Self {
    Self::builtin()
  }
}

impl StrategyRegistry {
  /// A registry with no host entries.
  pub fn empty(default: AuthorizationStrategy) -> Self {
    Self {
      hosts: HashMap::new(),
      default,
    }
  }

  /// The built-in mapping: `github.com` uses token authorization, every other
  /// host passes the secret through.
  pub fn builtin() -> Self {
    Self::empty(AuthorizationStrategy::Passthrough).with_host(GITHUB_HOST, AuthorizationStrategy::Token)
  }

  /// Add or replace the strategy for `host`.
  pub fn with_host(mut self, host: impl Into<String>, strategy: AuthorizationStrategy) -> Self {
    self.hosts.insert(host.into(), strategy);
    self
  }

  /// Replace the strategy used for unregistered hosts.
  pub fn with_default(mut self, strategy: AuthorizationStrategy) -> Self {
    self.default = strategy;
    self
  }

  /// Layer a [`RegistryConfig`] over the built-in mapping.
  ///
  /// Hosts listed in the config override built-in entries; built-in hosts not
  /// mentioned are kept.
  pub fn from_config(config: RegistryConfig) -> Self {
    config
      .hosts
      .into_iter()
      .fold(Self::builtin().with_default(config.default), |registry, (host, strategy)| {
        registry.with_host(host, strategy)
      })
  }

  /// Parse a TOML [`RegistryConfig`] and layer it over the built-in mapping.
  pub fn from_toml_str(content: &str) -> Result<Self, RegistryConfigError> {
    let config: RegistryConfig = toml::from_str(content)?;
    Ok(Self::from_config(config))
  }

  /// Load a TOML [`RegistryConfig`] from disk.
  pub fn from_config_file(path: &Path) -> Result<Self, RegistryConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| RegistryConfigError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    let registry = Self::from_toml_str(&content)?;
    debug!(path = %path.display(), hosts = registry.hosts.len(), "Loaded authorization config");
    Ok(registry)
  }

  /// Strategy for `host`, matched exactly and case-sensitively.
  pub fn strategy_for(&self, host: &str) -> AuthorizationStrategy {
    self.hosts.get(host).copied().unwrap_or(self.default)
  }

  /// Strategy used for unregistered hosts.
  pub const fn default_strategy(&self) -> AuthorizationStrategy {
    self.default
  }
}
