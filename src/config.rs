//! Stream session configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the filtered stream session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Base URL of the streaming API (default: https://stream.twitter.com)
    #[serde(default = "default_stream_url")]
    pub stream_url: String,

    /// Connection establishment timeout. Applies to the handshake only;
    /// an open stream is expected to stay up indefinitely.
    #[serde(default = "default_connect_timeout", with = "duration_secs")]
    pub connect_timeout: Duration,

    /// Ask the server to emit stall warnings on an idle connection
    #[serde(default = "default_stall_warnings")]
    pub stall_warnings: bool,
}

fn default_stream_url() -> String {
    "https://stream.twitter.com".into()
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(90)
}

const fn default_stall_warnings() -> bool {
    true
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            stream_url: default_stream_url(),
            connect_timeout: default_connect_timeout(),
            stall_warnings: default_stall_warnings(),
        }
    }
}
