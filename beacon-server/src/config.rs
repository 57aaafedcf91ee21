//! Relay configuration loaded from environment variables.

use std::net::SocketAddr;

/// Runtime configuration for the signaling relay.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Address the HTTP/WebSocket listener binds to.
    pub listen_addr: SocketAddr,
    /// Maximum accepted WebSocket message size in bytes.
    pub max_message_size: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        RelayConfig {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            max_message_size: 1_048_576, // 1 MiB
        }
    }
}

impl RelayConfig {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("BEACON_LISTEN_ADDR") {
            if let Ok(parsed) = addr.parse() {
                config.listen_addr = parsed;
            }
        }

        if let Ok(val) = std::env::var("BEACON_MAX_MESSAGE_SIZE") {
            if let Ok(parsed) = val.parse() {
                config.max_message_size = parsed;
            }
        }

        config
    }
}
