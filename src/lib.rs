//! # Hostauth
//!
//! Resolves the credentials to present to a remote host and formats them
//! into an `Authorization` header value.
//!
//! Credentials come from a [`CredentialProvider`], by default a `.netrc`
//! file read through [`NetrcCredentialProvider`]. The header format is chosen
//! per host by an [`AuthorizationDispatcher`] backed by an immutable
//! [`StrategyRegistry`].
//!
//! ```no_run
//! use hostauth::{AuthorizationDispatcher, NetrcCredentialProvider, StrategyRegistry, authorization_header};
//!
//! # fn main() -> anyhow::Result<()> {
//! let provider = NetrcCredentialProvider::discover()?;
//! let registry = StrategyRegistry::builtin();
//! let dispatcher = AuthorizationDispatcher::new(&registry);
//!
//! let header = authorization_header(&provider, &dispatcher, "github.com")?;
//! if !header.is_empty() {
//!   // attach `Authorization: {header}` to the request
//! }
//! # Ok(())
//! # }
//! ```

pub mod authorization;
pub mod consts;
pub mod error;

pub use authorization::{AuthorizationDispatcher, AuthorizationStrategy, RegistryConfig, StrategyRegistry};
pub use error::RegistryConfigError;
pub use hostauth_core::{
  ConfigError, CredentialProvider, Credentials, CredentialsError, NetrcCredentialProvider, NetrcLocation,
  normalize_host, resolve_netrc_path,
};
use tracing::{debug, instrument};
use url::Url;

/// Resolve credentials for `host` and format the header value for it.
///
/// A host without credentials yields the value the dispatcher produces for
/// an absent credential, which is an empty string for every built-in
/// strategy.
///
/// # Errors
///
/// Propagates [`CredentialsError`] from the provider unchanged, so a missing
/// or unreadable login file is never mistaken for "no credentials".
#[instrument(skip(provider, dispatcher), level = "debug")]
pub fn authorization_header<P: CredentialProvider + ?Sized>(
  provider: &P,
  dispatcher: &AuthorizationDispatcher<'_>,
  host: &str,
) -> Result<String, CredentialsError> {
  let credentials = provider.get_credentials(host)?;
  Ok(dispatcher.attach_authorization(host, credentials.as_ref()))
}

/// Like [`authorization_header`], taking the host from a URL.
///
/// URLs without a host (for example `file:` URLs) yield an empty value and
/// do not consult the provider.
pub fn authorization_header_for_url<P: CredentialProvider + ?Sized>(
  provider: &P,
  dispatcher: &AuthorizationDispatcher<'_>,
  url: &Url,
) -> Result<String, CredentialsError> {
  match url.host_str() {
    Some(host) => authorization_header(provider, dispatcher, host),
    None => {
      debug!(%url, "URL has no host, skipping authorization");
      Ok(String::new())
    }
  }
}
