//! OAuth 1.0a credential loading.
//!
//! Credentials live in a plain-text file with four significant lines in
//! fixed order: consumer key, consumer secret, access token, access token
//! secret. No key=value syntax, no quoting; surrounding whitespace is
//! stripped and blank lines are skipped.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Conventional credential file location, relative to the working directory.
pub const DEFAULT_CREDENTIALS_PATH: &str = "keys.txt";

/// OAuth 1.0a key material.
///
/// Consumer key/secret identify the application; access token/secret
/// identify the user. All four fields are opaque strings.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// OAuth 1.0a Consumer Key (API Key)
    pub consumer_key: String,

    /// OAuth 1.0a Consumer Secret (API Secret)
    pub consumer_secret: String,

    /// OAuth 1.0a Access Token
    pub access_token: String,

    /// OAuth 1.0a Access Token Secret
    pub access_token_secret: String,
}

impl Credentials {
    /// Read credentials from a newline-delimited file.
    ///
    /// The four fields are populated positionally from the first four
    /// non-empty lines. Line content is never validated beyond that.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file is missing or unreadable and
    /// [`Error::Config`] if it holds fewer than four non-empty lines.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading stream credentials from file");

        let contents = fs::read_to_string(path)?;
        let mut lines = contents.lines().map(str::trim).filter(|l| !l.is_empty());

        let mut field = |name: &str| {
            lines.next().map(str::to_owned).ok_or_else(|| {
                Error::Config(format!(
                    "credential file {} is missing the {name} line",
                    path.display()
                ))
            })
        };

        Ok(Self {
            consumer_key: field("consumer key")?,
            consumer_secret: field("consumer secret")?,
            access_token: field("access token")?,
            access_token_secret: field("access token secret")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::NamedTempFile;

    fn credential_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_loads_four_lines_in_order() {
        let file = credential_file("k1\nk2\nk3\nk4\n");

        let creds = Credentials::from_file(file.path()).unwrap();
        assert_eq!(creds.consumer_key, "k1");
        assert_eq!(creds.consumer_secret, "k2");
        assert_eq!(creds.access_token, "k3");
        assert_eq!(creds.access_token_secret, "k4");
    }

    #[test]
    fn test_strips_surrounding_whitespace() {
        let file = credential_file("  consumer \nsecret\t\n\n  token\ntoken-secret  \n");

        let creds = Credentials::from_file(file.path()).unwrap();
        assert_eq!(creds.consumer_key, "consumer");
        assert_eq!(creds.consumer_secret, "secret");
        assert_eq!(creds.access_token, "token");
        assert_eq!(creds.access_token_secret, "token-secret");
    }

    #[test]
    fn test_extra_lines_are_ignored() {
        let file = credential_file("a\nb\nc\nd\ntrailing-note\n");

        let creds = Credentials::from_file(file.path()).unwrap();
        assert_eq!(creds.access_token_secret, "d");
    }

    #[test]
    fn test_short_file_is_a_configuration_error() {
        let file = credential_file("a\nb\nc\n");

        let err = Credentials::from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("access token secret"));
    }

    #[test]
    fn test_blank_lines_do_not_count_as_fields() {
        let file = credential_file("a\n\n\nb\n\nc\n");

        let err = Credentials::from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-keys.txt");

        let err = Credentials::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
