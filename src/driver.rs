//! The run-forever stream driver.
//!
//! Wraps one [`StreamSession`] in an unbounded retry loop: every failure
//! of the blocking filter call is logged at error level and retried
//! immediately, with no backoff and no retry cap. The loop has no
//! designed exit besides the sink's consumer going away; the process is
//! expected to stop it externally.

use std::path::Path;

use tracing::{debug, error, info, warn};

use crate::{
    config::StreamConfig,
    credentials::Credentials,
    error::Result,
    sink::Sink,
    stream::{FilteredStream, SessionEnd, StreamSession},
};

/// Drives a filtered stream session, relaying items to a sink forever.
#[derive(Debug)]
pub struct StreamDriver<S> {
    session: S,
}

impl StreamDriver<FilteredStream> {
    /// Build a driver the way the original service starts up: load
    /// credentials from `path` and open an authenticated session.
    ///
    /// # Errors
    ///
    /// Credential and construction failures propagate to the caller;
    /// they are never swallowed by the retry loop.
    pub fn from_credentials_file(path: impl AsRef<Path>, config: StreamConfig) -> Result<Self> {
        let credentials = Credentials::from_file(path)?;
        Ok(Self::new(FilteredStream::new(credentials, config)?))
    }
}

impl<S: StreamSession> StreamDriver<S> {
    /// Wrap an already-constructed session.
    pub const fn new(session: S) -> Self {
        Self { session }
    }

    /// Maintain a live filtered connection for `keyword`, relaying every
    /// delivered item to `sink`.
    ///
    /// The same session object is reused across attempts. Returns only
    /// once the sink's consumer side is dropped; under sustained failure
    /// this loop retries and logs indefinitely.
    pub async fn run<Q: Sink>(&self, keyword: &str, sink: Q) {
        debug!(keyword, "starting filtered stream");

        loop {
            match self.session.filter(keyword, &sink).await {
                Ok(SessionEnd::SinkClosed) => {
                    info!(keyword, "sink closed, stopping stream driver");
                    return;
                }
                Ok(SessionEnd::Disconnected) => {
                    warn!(keyword, "stream disconnected, reconnecting");
                }
                Err(e) => {
                    error!(error = %e, keyword, "stream attempt failed, retrying");
                }
            }
        }
    }
}
