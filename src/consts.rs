//! Constants for hostauth

/// Host served with token-style authorization by the built-in registry
pub const GITHUB_HOST: &str = "github.com";
