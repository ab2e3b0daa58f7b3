//! Header formatting strategies.

use serde::{Deserialize, Serialize};

/// Prefix used by token-style authorization, e.g. `token ghp_xxx`.
pub const TOKEN_PREFIX: &str = "token ";

/// How a secret is rendered into an `Authorization` header value.
///
/// Strategies are pure: they never fail and never look at the host. Support
/// for a new host scheme is added as a new variant plus a registry entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorizationStrategy {
  /// `token <secret>`, or an empty value when there is no secret
  Token,
  /// The secret unchanged
  #[default]
  Passthrough,
}

impl AuthorizationStrategy {
  /// Format `secret` into a header value.
  ///
  /// An empty return value means the caller should not send the header.
  ///
  /// # Examples
  ///
  /// ```
  /// use hostauth::AuthorizationStrategy;
  ///
  /// assert_eq!(AuthorizationStrategy::Token.format("abc"), "token abc");
  /// assert_eq!(AuthorizationStrategy::Token.format(""), "");
  /// assert_eq!(AuthorizationStrategy::Passthrough.format("abc"), "abc");
  /// ```
  pub fn format(self, secret: &str) -> String {
    match self {
      Self::Token if secret.is_empty() => String::new(),
      Self::Token => format!("{TOKEN_PREFIX}{secret}"),
      Self::Passthrough => secret.to_string(),
    }
  }
}
