//! Selects the strategy for a host and applies it to a credential's secret.

use hostauth_core::Credentials;
use tracing::trace;

use super::registry::StrategyRegistry;

/// Produces `Authorization` header values from a shared [`StrategyRegistry`].
///
/// Dispatching is total: an unknown host, a missing credential or a missing
/// secret all produce a value (possibly empty) rather than an error.
#[derive(Debug, Clone, Copy)]
pub struct AuthorizationDispatcher<'r> {
  registry: &'r StrategyRegistry,
}

impl<'r> AuthorizationDispatcher<'r> {
  /// Create a dispatcher borrowing `registry`.
  pub const fn new(registry: &'r StrategyRegistry) -> Self {
    Self { registry }
  }

  /// The registry strategies are looked up in.
  pub const fn registry(&self) -> &'r StrategyRegistry {
    self.registry
  }

  /// Header value for `host` given the credentials resolved for it.
  ///
  /// An empty string means no `Authorization` header should be sent.
  pub fn attach_authorization(&self, host: &str, credentials: Option<&Credentials>) -> String {
    let secret = credentials.map(Credentials::secret_or_empty).unwrap_or_default();
    let strategy = self.registry.strategy_for(host);
    trace!(host, ?strategy, has_secret = !secret.is_empty(), "Dispatching authorization");

    strategy.format(secret)
  }
}
