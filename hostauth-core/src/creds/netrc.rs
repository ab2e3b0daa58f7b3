//! Helpers for reading credentials stored in `.netrc` files.
//!
//! The login file is read in full and scanned as a single token stream, so
//! entries may be written on one line (`machine host login user password
//! pass`) or spread over several lines with arbitrary indentation. Scanning is
//! done by [`NetrcEntries`], a small state machine that yields each `machine`
//! entry independently of its neighbours.
//!
//! A requested host matches an entry when the host *ends with* the entry's
//! machine token, so `sub.example.com` picks up credentials stored for
//! `example.com`. The check is a plain string suffix and is not aware of
//! domain label boundaries: `notexample.com` matches `example.com` as well.
//! The first matching entry in file order wins, even when a later entry is
//! more specific.

use std::iter::Peekable;
use std::path::{Path, PathBuf};
use std::str::SplitWhitespace;

use tracing::{debug, instrument, trace};

use crate::config::{NetrcLocation, resolve_netrc_path};
use crate::consts::{LOGIN_KEYWORD, MACHINE_KEYWORD, PASSWORD_KEYWORD};
use crate::creds::{CredentialProvider, Credentials};
use crate::error::{ConfigError, CredentialsError};

/// A single `machine` entry borrowed from the login file text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetrcEntry<'a> {
  pub machine: &'a str,
  pub login: Option<&'a str>,
  pub password: Option<&'a str>,
}

impl<'a> NetrcEntry<'a> {
  const fn new(machine: &'a str) -> Self {
    Self {
      machine,
      login: None,
      password: None,
    }
  }

  /// Whether this entry applies to `host` (plain suffix match).
  pub fn matches(&self, host: &str) -> bool {
    host.ends_with(self.machine)
  }
}

impl From<NetrcEntry<'_>> for Credentials {
  fn from(entry: NetrcEntry<'_>) -> Self {
    Credentials::new(entry.login.map(str::to_owned), entry.password.map(str::to_owned))
  }
}

/// Scanner position while assembling one entry.
enum ScanState<'a> {
  SeekingMachine,
  CapturingHost,
  Clauses(NetrcEntry<'a>),
  CapturingLogin(NetrcEntry<'a>),
  CapturingPassword(NetrcEntry<'a>),
}

/// Iterator over the entries of a login file, in file order.
///
/// Tokens before the first `machine` keyword are ignored. After the machine
/// token, `login <value>` and `password <value>` clauses are collected in any
/// order until the next `machine` keyword or any other token, which ends the
/// entry. A repeated clause keeps its first value. Malformed input never
/// produces an error: a trailing `machine` without a host is dropped, and a
/// `login`/`password` keyword followed by `machine` or end of input leaves
/// that field absent.
pub struct NetrcEntries<'a> {
  tokens: Peekable<SplitWhitespace<'a>>,
}

impl<'a> NetrcEntries<'a> {
  pub fn new(content: &'a str) -> Self {
    Self {
      tokens: content.split_whitespace().peekable(),
    }
  }
}

impl<'a> Iterator for NetrcEntries<'a> {
  type Item = NetrcEntry<'a>;

  fn next(&mut self) -> Option<Self::Item> {
    let mut state = ScanState::SeekingMachine;

    loop {
      state = match state {
        ScanState::SeekingMachine => match self.tokens.next()? {
          MACHINE_KEYWORD => ScanState::CapturingHost,
          _ => ScanState::SeekingMachine,
        },
        ScanState::CapturingHost => ScanState::Clauses(NetrcEntry::new(self.tokens.next()?)),
        ScanState::Clauses(entry) => match self.tokens.peek().copied() {
          Some(LOGIN_KEYWORD) => {
            self.tokens.next();
            ScanState::CapturingLogin(entry)
          }
          Some(PASSWORD_KEYWORD) => {
            self.tokens.next();
            ScanState::CapturingPassword(entry)
          }
          // Next machine, an unknown token or end of input
          _ => return Some(entry),
        },
        // A clause value never swallows the keyword opening the next entry
        ScanState::CapturingLogin(mut entry) => match self.tokens.next_if(|token| *token != MACHINE_KEYWORD) {
          Some(value) => {
            entry.login.get_or_insert(value);
            ScanState::Clauses(entry)
          }
          None => return Some(entry),
        },
        ScanState::CapturingPassword(mut entry) => match self.tokens.next_if(|token| *token != MACHINE_KEYWORD) {
          Some(value) => {
            entry.password.get_or_insert(value);
            ScanState::Clauses(entry)
          }
          None => return Some(entry),
        },
      };
    }
  }
}

/// Finds the credentials for `host` in login file text.
///
/// Returns the first entry whose machine token is a suffix of `host`, or
/// `None` when the text is blank or nothing matches.
pub fn find_credentials(content: &str, host: &str) -> Option<Credentials> {
  let content = content.trim();
  if content.is_empty() {
    return None;
  }

  NetrcEntries::new(content)
    .inspect(|entry| {
      trace!(
        machine = entry.machine,
        has_login = entry.login.is_some(),
        has_password = entry.password.is_some(),
        "Scanned .netrc entry"
      );
    })
    .find(|entry| entry.matches(host))
    .map(Credentials::from)
}

/// Credential provider backed by a `.netrc` file.
///
/// The file is read and parsed on every lookup; nothing is cached.
#[derive(Debug, Clone)]
pub struct NetrcCredentialProvider {
  netrc_path: PathBuf,
}

impl NetrcCredentialProvider {
  /// Create a provider reading the login file at `netrc_path`.
  pub fn new(netrc_path: impl Into<PathBuf>) -> Self {
    Self {
      netrc_path: netrc_path.into(),
    }
  }

  /// Create a provider for the login file found via [`resolve_netrc_path`].
  pub fn discover() -> Result<Self, ConfigError> {
    Ok(Self::from(resolve_netrc_path(None)?))
  }

  pub fn netrc_path(&self) -> &Path {
    &self.netrc_path
  }
}

impl From<NetrcLocation> for NetrcCredentialProvider {
  fn from(location: NetrcLocation) -> Self {
    Self::new(location.into_path_buf())
  }
}

impl CredentialProvider for NetrcCredentialProvider {
  #[instrument(skip(self), fields(path = %self.netrc_path.display()), level = "debug")]
  fn get_credentials(&self, host: &str) -> Result<Option<Credentials>, CredentialsError> {
    let exists = self.netrc_path.try_exists().map_err(|source| CredentialsError::Io {
      path: self.netrc_path.clone(),
      source,
    })?;
    if !exists {
      return Err(CredentialsError::NotFound {
        path: self.netrc_path.clone(),
      });
    }

    let content = std::fs::read_to_string(&self.netrc_path).map_err(|source| CredentialsError::Io {
      path: self.netrc_path.clone(),
      source,
    })?;

    let credentials = find_credentials(&content, host);
    debug!(found = credentials.is_some(), "Resolved .netrc credentials");

    Ok(credentials)
  }
}

/// Normalizes a host URL by removing protocol prefixes and trailing slashes.
///
/// # Examples
///
/// ```
/// use hostauth_core::normalize_host;
///
/// assert_eq!(normalize_host("https://github.com/"), "github.com");
/// assert_eq!(normalize_host("http://mirror.example.com"), "mirror.example.com");
/// assert_eq!(normalize_host("example.com"), "example.com");
/// ```
pub fn normalize_host(raw_host: &str) -> String {
  raw_host
    .trim_start_matches("https://")
    .trim_start_matches("http://")
    .trim_end_matches('/')
    .to_string()
}

#[cfg(test)]
mod tests {
  use std::fs;

  use hostauth_test_utils::NetrcGuard;
  use tempfile::TempDir;

  use super::*;

  fn creds(login: Option<&str>, secret: Option<&str>) -> Credentials {
    Credentials::new(login.map(str::to_string), secret.map(str::to_string))
  }

  fn resolve(guard: &NetrcGuard, host: &str) -> Option<Credentials> {
    NetrcCredentialProvider::new(guard.netrc_path())
      .get_credentials(host)
      .unwrap()
  }

  #[test]
  fn test_parse_netrc_file_basic() {
    let guard = NetrcGuard::new(
      r#"machine example.com
  login testuser
  password testpass
"#,
    );

    let result = resolve(&guard, "example.com");
    assert_eq!(result, Some(creds(Some("testuser"), Some("testpass"))));
  }

  #[test]
  fn test_parse_netrc_file_multiple_machines() {
    let guard = NetrcGuard::new(
      r#"machine example.com
  login user1
  password pass1

machine github.com
  login user2
  password pass2

machine atlassian.com
  login user3
  password pass3
"#,
    );

    assert_eq!(resolve(&guard, "example.com"), Some(creds(Some("user1"), Some("pass1"))));
    assert_eq!(resolve(&guard, "github.com"), Some(creds(Some("user2"), Some("pass2"))));
    assert_eq!(resolve(&guard, "atlassian.com"), Some(creds(Some("user3"), Some("pass3"))));
  }

  #[test]
  fn test_parse_netrc_file_machine_not_found() {
    let guard = NetrcGuard::new(
      "machine some.host login user1 password pass1\nmachine some.host2 login user2 password pass2\n",
    );

    assert_eq!(resolve(&guard, "some.host3"), None);
  }

  #[test]
  fn test_parse_netrc_file_empty_file() {
    let guard = NetrcGuard::new("");
    assert_eq!(resolve(&guard, "example.com"), None);

    let guard = NetrcGuard::new("  \n\t\n");
    assert_eq!(resolve(&guard, "example.com"), None);
  }

  #[test]
  fn test_missing_file_is_a_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    let netrc_path = temp_dir.path().join("non_existing");

    let error = NetrcCredentialProvider::new(&netrc_path)
      .get_credentials("example.com")
      .unwrap_err();

    assert!(matches!(error, CredentialsError::NotFound { .. }));
    assert_eq!(error.path(), &netrc_path);
    assert!(error.to_string().contains("does not exist"));
  }

  #[test]
  fn test_unreadable_file_is_a_configuration_error() {
    let temp_dir = TempDir::new().unwrap();

    // A directory exists but cannot be read as text
    let error = NetrcCredentialProvider::new(temp_dir.path())
      .get_credentials("example.com")
      .unwrap_err();

    assert!(matches!(error, CredentialsError::Io { .. }));
  }

  #[test]
  fn test_invalid_utf8_is_a_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    let netrc_path = temp_dir.path().join(".netrc");
    fs::write(&netrc_path, [0x6d, 0x61, 0xff, 0xfe]).unwrap();

    let error = NetrcCredentialProvider::new(&netrc_path)
      .get_credentials("example.com")
      .unwrap_err();

    assert!(matches!(error, CredentialsError::Io { .. }));
  }

  #[test]
  fn test_machine_without_login_and_password() {
    let guard = NetrcGuard::new("machine example.com");
    assert_eq!(resolve(&guard, "example.com"), Some(Credentials::default()));
  }

  #[test]
  fn test_machine_with_login_only() {
    let guard = NetrcGuard::new("machine example.com login testuser");
    assert_eq!(resolve(&guard, "example.com"), Some(creds(Some("testuser"), None)));
  }

  #[test]
  fn test_machine_with_password_only() {
    let guard = NetrcGuard::new("machine example.com password testpass");
    assert_eq!(resolve(&guard, "example.com"), Some(creds(None, Some("testpass"))));
  }

  #[test]
  fn test_incomplete_entry_keeps_its_own_fields() {
    let guard = NetrcGuard::new(
      r#"machine example.com
  login testuser
machine github.com
  login user2
  password pass2
"#,
    );

    // The password of the next entry must not leak into this one
    assert_eq!(resolve(&guard, "example.com"), Some(creds(Some("testuser"), None)));
    assert_eq!(resolve(&guard, "github.com"), Some(creds(Some("user2"), Some("pass2"))));
  }

  #[test]
  fn test_clauses_in_either_order() {
    let guard = NetrcGuard::new("machine example.com password testpass login testuser\n");
    assert_eq!(resolve(&guard, "example.com"), Some(creds(Some("testuser"), Some("testpass"))));
  }

  #[test]
  fn test_parse_netrc_file_mixed_format() {
    let guard = NetrcGuard::new(
      "machine example.com login user1 password pass1\nmachine github.com\n  login user2\n  password \
       pass2\nmachine atlassian.com login user3\n  password pass3\n",
    );

    assert_eq!(resolve(&guard, "example.com"), Some(creds(Some("user1"), Some("pass1"))));
    assert_eq!(resolve(&guard, "github.com"), Some(creds(Some("user2"), Some("pass2"))));
    assert_eq!(resolve(&guard, "atlassian.com"), Some(creds(Some("user3"), Some("pass3"))));
  }

  #[test]
  fn test_entries_on_one_line() {
    let guard = NetrcGuard::new("machine a.com login u1 password p1 machine b.com login u2 password p2");

    assert_eq!(resolve(&guard, "a.com"), Some(creds(Some("u1"), Some("p1"))));
    assert_eq!(resolve(&guard, "b.com"), Some(creds(Some("u2"), Some("p2"))));
  }

  #[test]
  fn test_finds_host_in_the_middle_with_newlines_and_tabs() {
    let guard = NetrcGuard::new(
      "machine some.host\n\tlogin login1\n\t\tpassword pass1\nmachine some.host2 login login2 password pass2\nmachine \
       some.host3 login login3 password pass3\n",
    );

    assert_eq!(resolve(&guard, "some.host"), Some(creds(Some("login1"), Some("pass1"))));
    assert_eq!(resolve(&guard, "some.host2"), Some(creds(Some("login2"), Some("pass2"))));
  }

  #[test]
  fn test_subdomain_matches_parent_entry() {
    let guard = NetrcGuard::new("machine example.com login L password P\n");
    let expected = Some(creds(Some("L"), Some("P")));

    assert_eq!(resolve(&guard, "example.com"), expected);
    assert_eq!(resolve(&guard, "sub.example.com"), expected);
  }

  #[test]
  fn test_suffix_match_ignores_label_boundaries() {
    let guard = NetrcGuard::new("machine example.com login L password P\n");
    assert_eq!(resolve(&guard, "notexample.com"), Some(creds(Some("L"), Some("P"))));
  }

  #[test]
  fn test_first_match_wins_over_more_specific_entry() {
    let guard = NetrcGuard::new(
      "machine example.com login L1 password P1\nmachine sub.example.com login L2 password P2\n",
    );

    assert_eq!(resolve(&guard, "sub.example.com"), Some(creds(Some("L1"), Some("P1"))));
  }

  #[test]
  fn test_parse_netrc_file_malformed() {
    let guard = NetrcGuard::new(
      r#"machine custom-host.com
  login custom@example.com
  # missing password

machine github.com
  login testuser
  password gh-token
  some-invalid-line
machine
"#,
    );

    assert_eq!(
      resolve(&guard, "custom-host.com"),
      Some(creds(Some("custom@example.com"), None))
    );
    assert_eq!(resolve(&guard, "github.com"), Some(creds(Some("testuser"), Some("gh-token"))));
  }

  #[test]
  fn test_resolution_is_repeatable() {
    let guard = NetrcGuard::new("machine example.com login L password P\n");
    let provider = NetrcCredentialProvider::new(guard.netrc_path());

    let first = provider.get_credentials("example.com").unwrap();
    let second = provider.get_credentials("example.com").unwrap();
    assert_eq!(first, second);
  }

  #[test]
  fn test_file_is_reread_on_every_lookup() {
    let guard = NetrcGuard::new("machine example.com login old password old-pass\n");
    let provider = NetrcCredentialProvider::new(guard.netrc_path());
    assert_eq!(
      provider.get_credentials("example.com").unwrap(),
      Some(creds(Some("old"), Some("old-pass")))
    );

    guard.write("machine example.com login new password new-pass\n");
    assert_eq!(
      provider.get_credentials("example.com").unwrap(),
      Some(creds(Some("new"), Some("new-pass")))
    );
  }

  #[test]
  fn test_entries_scanner() {
    let entries: Vec<_> =
      NetrcEntries::new("login stray machine a login u1 login u2 password machine b password").collect();

    assert_eq!(
      entries,
      vec![
        NetrcEntry {
          machine: "a",
          login: Some("u1"),
          password: None,
        },
        NetrcEntry::new("b"),
      ]
    );
  }

  #[test]
  fn test_dangling_clause_does_not_swallow_next_entry() {
    let content = "machine a.com login u1 password
machine b.com login u2 password p2
";

    assert_eq!(find_credentials(content, "a.com"), Some(creds(Some("u1"), None)));
    assert_eq!(find_credentials(content, "b.com"), Some(creds(Some("u2"), Some("p2"))));

    let content = "machine github.com login
machine example.com password p
";
    assert_eq!(find_credentials(content, "github.com"), Some(Credentials::default()));
    assert_eq!(find_credentials(content, "example.com"), Some(creds(None, Some("p"))));
  }

  #[test]
  fn test_entries_scanner_truncated_input() {
    assert_eq!(NetrcEntries::new("machine").count(), 0);

    let entries: Vec<_> = NetrcEntries::new("machine a.com login").collect();
    assert_eq!(entries, vec![NetrcEntry::new("a.com")]);

    let entries: Vec<_> = NetrcEntries::new("machine a.com password p machine b.com").collect();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].password, Some("p"));
    assert_eq!(entries[1], NetrcEntry::new("b.com"));
  }

  #[test]
  fn test_find_credentials_without_file() {
    assert_eq!(find_credentials("", "example.com"), None);
    assert_eq!(
      find_credentials("machine github.com login me password tok", "api.github.com"),
      Some(creds(Some("me"), Some("tok")))
    );
  }

  #[test]
  fn test_normalize_host_removes_https_and_trailing_slash() {
    let result = normalize_host("https://api.example.com/");
    assert_eq!(result, "api.example.com");
  }

  #[test]
  fn test_normalize_host_removes_http_and_trailing_slash() {
    let result = normalize_host("http://localhost:8080/");
    assert_eq!(result, "localhost:8080");
  }
}
