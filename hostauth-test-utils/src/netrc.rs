//! Scratch `.netrc` files for tests.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

/// RAII guard for test .netrc files
///
/// Creates a temporary directory holding a `.netrc` file with the given
/// content. The directory and file are removed when the guard is dropped.
/// Unlike [`crate::HomeEnvTestGuard`], no environment variables are touched,
/// so tests using only this guard can run in parallel.
pub struct NetrcGuard {
  // Keeps the directory alive until the guard is dropped
  _temp_dir: TempDir,
  netrc_path: PathBuf,
}

impl NetrcGuard {
  /// Create a new NetrcGuard with the given content
  pub fn new(content: &str) -> Self {
    Self::try_new(content).expect("Failed to create test .netrc")
  }

  /// Fallible variant of [`NetrcGuard::new`]
  pub fn try_new(content: &str) -> Result<Self> {
    let temp_dir = TempDir::new().context("Failed to create temp directory")?;
    let netrc_path = temp_dir.path().join(".netrc");
    fs::write(&netrc_path, content).context("Failed to write test .netrc")?;

    Ok(Self {
      _temp_dir: temp_dir,
      netrc_path,
    })
  }

  /// Replace the content of the .netrc file
  pub fn write(&self, content: &str) {
    fs::write(&self.netrc_path, content).expect("Failed to rewrite test .netrc");
  }

  /// Get the path to the .netrc file
  pub fn netrc_path(&self) -> &Path {
    &self.netrc_path
  }
}
