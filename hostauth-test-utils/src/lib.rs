//! Test utilities shared across the hostauth workspace
//!
//! This crate provides common testing infrastructure including:
//! - Scratch `.netrc` files ([`NetrcGuard`])
//! - Environment variable isolation ([`EnvVarGuard`])
//! - HOME directory isolation ([`HomeEnvTestGuard`])
//!
//! The dead_code lint is disabled for this crate because test utilities may
//! not be used by all tests, and the compiler cannot detect usage across crate
//! boundaries in development dependencies.

#![allow(dead_code)]

pub mod env;
pub mod home;
pub mod netrc;

// Re-export commonly used items
pub use env::EnvVarGuard;
pub use home::HomeEnvTestGuard;
pub use netrc::NetrcGuard;
