//! Gateway configuration read from the process environment.

use std::net::SocketAddr;

/// Environment variable holding the listen address.
pub const LISTEN_ADDR_VAR: &str = "ACTIVITIES_LISTEN_ADDR";

/// Listen address used when [`LISTEN_ADDR_VAR`] is unset.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";

/// Errors raised while loading [`GatewayConfig`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The listen address could not be parsed as `host:port`.
    #[error("invalid listen address '{value}': {source}")]
    InvalidListenAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Socket address the server binds to.
    pub listen_addr: SocketAddr,
}

impl GatewayConfig {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidListenAddr`] if [`LISTEN_ADDR_VAR`] is set
    /// to something that is not a socket address.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_listen_addr(std::env::var(LISTEN_ADDR_VAR).ok().as_deref())
    }

    /// Build a config from an optional raw listen address.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidListenAddr`] if `raw` does not parse.
    pub fn from_listen_addr(raw: Option<&str>) -> Result<Self, ConfigError> {
        let value = raw.unwrap_or(DEFAULT_LISTEN_ADDR).trim();
        let listen_addr = value.parse().map_err(|source| ConfigError::InvalidListenAddr {
            value: value.to_owned(),
            source,
        })?;
        Ok(Self { listen_addr })
    }
}
