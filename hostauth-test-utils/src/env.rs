//! Environment variable management for testing
//!
//! Tests that change process-wide environment variables should hold an
//! [`EnvVarGuard`] so the original value is restored afterwards.

use std::env;
use std::ffi::OsString;

/// Saves one environment variable and restores it on drop
pub struct EnvVarGuard {
  name: String,
  original: Option<OsString>,
}

impl EnvVarGuard {
  /// Capture the current value of `name`
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      original: env::var_os(name),
    }
  }

  /// Set the variable for the lifetime of the guard
  pub fn set(&self, value: &str) {
    unsafe {
      env::set_var(&self.name, value);
    }
  }

  /// Unset the variable for the lifetime of the guard
  pub fn remove(&self) {
    unsafe {
      env::remove_var(&self.name);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    match &self.original {
      Some(val) => unsafe {
        env::set_var(&self.name, val);
      },
      None => unsafe {
        env::remove_var(&self.name);
      },
    }
  }
}
