//! Error types for credential resolution and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving credentials from a login file.
///
/// Both variants describe a misconfigured environment. A login file that
/// exists but has no entry for the requested host is not an error; it is
/// reported as `Ok(None)` by the provider.
#[derive(Debug, Error)]
pub enum CredentialsError {
  #[error(".netrc file by path '{}' does not exist", .path.display())]
  NotFound { path: PathBuf },
  #[error("Failed to read .netrc file '{}': {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

impl CredentialsError {
  /// Path of the login file the error refers to.
  pub fn path(&self) -> &PathBuf {
    match self {
      Self::NotFound { path } | Self::Io { path, .. } => path,
    }
  }
}

/// Errors raised while locating the login file.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Could not determine the home directory to locate .netrc")]
  HomeDirUnavailable,
}
