//! Core constants shared across hostauth components.

/// Environment variable that overrides the login file location.
pub const ENV_NETRC: &str = "NETRC";

/// File name of the login file inside the home directory.
pub const NETRC_FILE_NAME: &str = ".netrc";

/// Keyword that opens a login file entry.
pub const MACHINE_KEYWORD: &str = "machine";

/// Keyword introducing the login clause of an entry.
pub const LOGIN_KEYWORD: &str = "login";

/// Keyword introducing the password clause of an entry.
pub const PASSWORD_KEYWORD: &str = "password";
