//! # Credential Management
//!
//! Retrieval of the login and secret to present to a remote host. The
//! [`CredentialProvider`] trait keeps call sites independent of where the
//! credentials live; the default implementation reads a `.netrc` file.

pub mod netrc;

use std::fmt;

use crate::error::CredentialsError;

/// Credentials resolved for a single host.
///
/// Both fields are optional: a login file entry may carry only a `login`,
/// only a `password`, or neither.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
  pub login: Option<String>,
  pub secret: Option<String>,
}

impl Credentials {
  pub fn new(login: Option<String>, secret: Option<String>) -> Self {
    Self { login, secret }
  }

  /// The secret, or an empty string when none was provided.
  pub fn secret_or_empty(&self) -> &str {
    self.secret.as_deref().unwrap_or_default()
  }
}

impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credentials")
      .field("login", &self.login)
      .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
      .finish()
  }
}

/// Source of per-host credentials.
pub trait CredentialProvider {
  /// Get credentials for a host.
  ///
  /// # Returns
  ///
  /// * `Ok(Some(Credentials))` when an entry matches the host.
  /// * `Ok(None)` when the source has no entry for the host.
  ///
  /// # Errors
  ///
  /// Returns a [`CredentialsError`] when the source itself is misconfigured,
  /// for example when the login file is missing or unreadable.
  fn get_credentials(&self, host: &str) -> Result<Option<Credentials>, CredentialsError>;
}

impl<P: CredentialProvider + ?Sized> CredentialProvider for &P {
  fn get_credentials(&self, host: &str) -> Result<Option<Credentials>, CredentialsError> {
    (**self).get_credentials(host)
  }
}

impl<P: CredentialProvider + ?Sized> CredentialProvider for Box<P> {
  fn get_credentials(&self, host: &str) -> Result<Option<Credentials>, CredentialsError> {
    (**self).get_credentials(host)
  }
}
