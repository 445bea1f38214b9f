//! Stream ingestion error types.

use thiserror::Error;

/// Errors raised while loading credentials or streaming.
#[derive(Error, Debug)]
pub enum Error {
    /// Credential file missing or unreadable
    #[error("credential file error: {0}")]
    Io(#[from] std::io::Error),

    /// Credential file structurally invalid, or bad configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Streaming endpoint returned a non-success status
    #[error("stream API error {status}: {message}")]
    Api { status: u16, message: String },

    /// OAuth signature generation failed
    #[error("OAuth error: {0}")]
    OAuth(String),

    /// Connection dropped or failed mid-stream
    #[error("stream error: {0}")]
    Stream(String),
}

impl Error {
    /// Whether this error is a transport failure worth reconnecting over.
    ///
    /// Configuration and signing errors are not retryable; they surface
    /// before the stream driver's loop ever starts.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) | Self::Stream(_) => true,
            Self::Api { status, .. } => *status >= 500 || *status == 420 || *status == 429,
            Self::Io(_) | Self::Config(_) | Self::OAuth(_) => false,
        }
    }
}

/// Result type for stream ingestion operations.
pub type Result<T> = std::result::Result<T, Error>;
