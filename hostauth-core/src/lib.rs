//! # Hostauth Core Library
//!
//! Credential discovery for hostauth. Reads `.netrc` login files, resolves
//! the entry for a requested host and reports configuration problems as
//! errors distinct from "no credentials for this host".

pub mod config;
pub mod consts;
pub mod creds;
pub mod error;

pub use config::{NetrcLocation, get_netrc_path, resolve_netrc_path};
pub use creds::netrc::{NetrcCredentialProvider, NetrcEntries, NetrcEntry, find_credentials, normalize_host};
pub use creds::{CredentialProvider, Credentials};
pub use error::{ConfigError, CredentialsError};
