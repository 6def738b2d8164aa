//! Connection settings for the adapter group.

use serde::Deserialize;

/// The crate's single configuration surface.
///
/// The composition root reads this, establishes the transport against
/// `endpoint`, and hands each adapter its channel; nothing here is consulted
/// again after construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Address of the remote service endpoint.
    pub endpoint: String,
    /// Capacity of each per-service call channel.
    pub channel_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://localhost:7268".to_owned(),
            channel_capacity: 32,
        }
    }
}
