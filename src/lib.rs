//! Keyword-filtered social stream ingestion.
//!
//! Connects to a social-media streaming API, asks the server to filter
//! posts by a keyword, and forwards every matching item to a
//! caller-supplied sink. Items are relayed as opaque payloads; this crate
//! never parses or filters them client-side.
//!
//! ## Pieces
//!
//! - [`Credentials`] - OAuth 1.0a key material read from a four-line file
//! - [`FilteredStream`] - the authenticated streaming session
//! - [`StreamDriver`] - the run-forever retry loop around the session
//! - [`Sink`] - the queue-like capability that receives feed items
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use keyword_firehose::{FeedItem, QueueSink, StreamConfig, StreamDriver};
//!
//! let (tx, mut rx) = tokio::sync::mpsc::channel::<FeedItem>(256);
//! let driver = StreamDriver::from_credentials_file("keys.txt", StreamConfig::default())?;
//!
//! // Runs until the process is killed or `rx` is dropped.
//! driver.run("rustlang", QueueSink::new(tx)).await;
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod config;
mod credentials;
mod driver;
mod error;
mod oauth;
mod sink;
mod stream;

pub use config::StreamConfig;
pub use credentials::{Credentials, DEFAULT_CREDENTIALS_PATH};
pub use driver::StreamDriver;
pub use error::{Error, Result};
pub use sink::{FeedItem, QueueSink, Sink, SinkClosed};
pub use stream::{FilteredStream, SessionEnd, StreamSession};
