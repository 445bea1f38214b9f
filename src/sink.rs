//! Feed items and the sink capability they are delivered to.

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::mpsc;

/// One item delivered by the filtered stream.
///
/// The payload is opaque: it is relayed exactly as received from the
/// wire, with no parsing, validation, or client-side filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem(Bytes);

impl FeedItem {
    /// Wrap a raw payload.
    pub fn new(payload: impl Into<Bytes>) -> Self {
        Self(payload.into())
    }

    /// The raw payload bytes.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.0
    }

    /// Consume the item, yielding its payload.
    #[must_use]
    pub fn into_payload(self) -> Bytes {
        self.0
    }
}

impl AsRef<[u8]> for FeedItem {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// The sink's consumer side is gone; no further items can be delivered.
#[derive(Debug, thiserror::Error)]
#[error("feed item receiver dropped")]
pub struct SinkClosed;

/// Destination for feed items.
///
/// The sink is a caller-supplied capability with a single operation. It
/// is invoked from the task that reads the stream, so implementations
/// must be safe to call from a context the caller does not control.
/// Capacity and consumption policy are entirely the implementor's
/// concern; this crate never reads items back.
#[async_trait]
pub trait Sink: Send + Sync {
    /// Accept one feed item.
    ///
    /// # Errors
    ///
    /// Returns [`SinkClosed`] once the consumer side has gone away.
    async fn accept(&self, item: FeedItem) -> std::result::Result<(), SinkClosed>;
}

/// [`Sink`] adapter over a tokio mpsc channel.
pub struct QueueSink {
    tx: mpsc::Sender<FeedItem>,
}

impl QueueSink {
    /// Wrap the sending half of a channel.
    #[must_use]
    pub const fn new(tx: mpsc::Sender<FeedItem>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl Sink for QueueSink {
    async fn accept(&self, item: FeedItem) -> std::result::Result<(), SinkClosed> {
        self.tx.send(item).await.map_err(|_| SinkClosed)
    }
}
