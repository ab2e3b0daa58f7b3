//! # Authorization Headers
//!
//! Turns resolved credentials into the value of an `Authorization` header.
//! Each host is served by one [`AuthorizationStrategy`], looked up by exact
//! host name in an immutable [`StrategyRegistry`]. Hosts without an entry use
//! the registry default.

pub mod dispatcher;
pub mod registry;
pub mod strategy;

pub use dispatcher::AuthorizationDispatcher;
pub use registry::{RegistryConfig, StrategyRegistry};
pub use strategy::AuthorizationStrategy;
