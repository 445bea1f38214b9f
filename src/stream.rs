//! The authenticated filtered stream session.
//!
//! Opens a keyword-filtered connection to the streaming endpoint and
//! relays every delivered line to a [`Sink`] as one opaque item. The
//! keyword filter is applied server-side; nothing is inspected locally.

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::StreamExt;
use tracing::{debug, info};

use crate::{
    config::StreamConfig,
    credentials::Credentials,
    error::{Error, Result},
    oauth::{OAuthSigner, percent_encode},
    sink::{FeedItem, Sink},
};

/// How a single stream attempt ended without a transport error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The server closed the connection; the driver reconnects.
    Disconnected,

    /// The sink's consumer side is gone; the driver stops.
    SinkClosed,
}

/// A keyword-filtered streaming session.
///
/// One session object is constructed per driver and reused across every
/// reconnect attempt; `filter` blocks until the connection drops, errors,
/// or the sink closes.
#[async_trait]
pub trait StreamSession: Send + Sync {
    /// Open the server-side keyword-filtered stream and deliver each
    /// received item to `sink` until the connection ends.
    async fn filter(&self, keyword: &str, sink: &dyn Sink) -> Result<SessionEnd>;
}

/// HTTP implementation of [`StreamSession`] over the public filter endpoint.
#[derive(Debug)]
pub struct FilteredStream {
    client: reqwest::Client,
    endpoint: String,
    signer: OAuthSigner,
    stall_warnings: bool,
}

impl FilteredStream {
    /// Build a session from credentials and configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the HTTP client cannot be constructed.
    pub fn new(credentials: Credentials, config: StreamConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("keyword-firehose/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}/1.1/statuses/filter.json",
                config.stream_url.trim_end_matches('/')
            ),
            signer: OAuthSigner::new(credentials),
            stall_warnings: config.stall_warnings,
        })
    }

    fn request_params(&self, keyword: &str) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(2);
        if self.stall_warnings {
            params.push(("stall_warnings".to_string(), "true".to_string()));
        }
        params.push(("track".to_string(), keyword.to_string()));
        params
    }
}

#[async_trait]
impl StreamSession for FilteredStream {
    async fn filter(&self, keyword: &str, sink: &dyn Sink) -> Result<SessionEnd> {
        let params = self.request_params(keyword);
        let auth_header = self.signer.sign("GET", &self.endpoint, &params)?;

        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        debug!(keyword, endpoint = %self.endpoint, "connecting to filtered stream");

        let response = self
            .client
            .get(format!("{}?{}", self.endpoint, query))
            .header("Authorization", auth_header)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Api { status, message });
        }

        let mut stream = response.bytes_stream();
        let mut buffer: Vec<u8> = Vec::new();

        while let Some(chunk_result) = stream.next().await {
            let chunk: Bytes = chunk_result?;
            buffer.extend_from_slice(&chunk);

            // Deliver complete lines; a blank line is a keep-alive.
            while let Some(newline_pos) = buffer.iter().position(|&b| b == b'\n') {
                let mut line: Vec<u8> = buffer.drain(..=newline_pos).collect();
                while line.last() == Some(&b'\n') || line.last() == Some(&b'\r') {
                    line.pop();
                }

                if line.is_empty() {
                    debug!("received keep-alive");
                    continue;
                }

                if sink.accept(FeedItem::new(line)).await.is_err() {
                    info!("feed item receiver dropped, ending stream");
                    return Ok(SessionEnd::SinkClosed);
                }
            }
        }

        debug!(keyword, "stream ended");
        Ok(SessionEnd::Disconnected)
    }
}
