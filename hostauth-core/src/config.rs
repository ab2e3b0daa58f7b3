//! # Login File Configuration
//!
//! Decides which `.netrc` file a provider reads. The lookup order is an
//! explicit path supplied by the caller, then the `NETRC` environment
//! variable, then `.netrc` in the user's home directory.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use tracing::debug;

use crate::consts::{ENV_NETRC, NETRC_FILE_NAME};
use crate::error::ConfigError;

/// Where the login file path came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetrcLocation {
  /// Path passed in by the caller
  Explicit(PathBuf),
  /// Path taken from the `NETRC` environment variable
  Environment(PathBuf),
  /// `.netrc` inside the home directory
  Home(PathBuf),
}

impl NetrcLocation {
  /// The resolved login file path.
  pub fn path(&self) -> &Path {
    match self {
      Self::Explicit(path) | Self::Environment(path) | Self::Home(path) => path,
    }
  }

  /// Consume the location, returning the login file path.
  pub fn into_path_buf(self) -> PathBuf {
    match self {
      Self::Explicit(path) | Self::Environment(path) | Self::Home(path) => path,
    }
  }
}

/// Returns the path to the `.netrc` file for the provided home directory.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use hostauth_core::config::get_netrc_path;
///
/// let home = Path::new("/home/user");
/// let path = get_netrc_path(home);
/// assert_eq!(path, Path::new("/home/user/.netrc"));
/// ```
pub fn get_netrc_path(home: &Path) -> PathBuf {
  home.join(NETRC_FILE_NAME)
}

/// Resolves the login file location.
///
/// An explicit path always wins. Otherwise a non-empty `NETRC` environment
/// variable is used, and finally `~/.netrc`. The returned path is not checked
/// for existence; a missing file is reported when credentials are resolved.
///
/// # Errors
///
/// Returns [`ConfigError::HomeDirUnavailable`] when neither an explicit path
/// nor `NETRC` is set and the home directory cannot be determined.
pub fn resolve_netrc_path(explicit: Option<&Path>) -> Result<NetrcLocation, ConfigError> {
  if let Some(path) = explicit {
    debug!(path = %path.display(), "Using explicit .netrc path");
    return Ok(NetrcLocation::Explicit(path.to_path_buf()));
  }

  if let Some(path) = std::env::var_os(ENV_NETRC).filter(|value| !value.is_empty()) {
    let path = PathBuf::from(path);
    debug!(path = %path.display(), "Using .netrc path from NETRC");
    return Ok(NetrcLocation::Environment(path));
  }

  let base_dirs = BaseDirs::new().ok_or(ConfigError::HomeDirUnavailable)?;
  let path = get_netrc_path(base_dirs.home_dir());
  debug!(path = %path.display(), "Using .netrc path from home directory");
  Ok(NetrcLocation::Home(path))
}
