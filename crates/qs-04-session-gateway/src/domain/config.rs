//! Gateway configuration with validation.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Default listening port
pub const DEFAULT_PORT: u16 = 8000;

/// Default WebSocket route
pub const DEFAULT_WS_PATH: &str = "/ws";

/// Default maximum inbound frame size (64 KiB)
pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 64 * 1024;

/// Default idle timeout
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 300;

/// Route reserved for the health check
pub const HEALTH_PATH: &str = "/health";

/// Main gateway configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Bind address
    pub host: IpAddr,
    /// Port (default: 8000, 0 picks an ephemeral port)
    pub port: u16,
    /// Route serving the WebSocket upgrade
    pub ws_path: String,
    /// Frames larger than this get an error reply
    pub max_message_size: usize,
    /// Close connections with no inbound traffic for this long
    pub idle_timeout_secs: u64,
    /// Allowed CORS origins; `"*"` allows any
    pub cors_origins: Vec<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: DEFAULT_PORT,
            ws_path: DEFAULT_WS_PATH.to_string(),
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
            idle_timeout_secs: DEFAULT_IDLE_TIMEOUT_SECS,
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl GatewayConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.ws_path.starts_with('/') {
            return Err(ConfigError::InvalidPath(self.ws_path.clone()));
        }
        if self.ws_path == HEALTH_PATH {
            return Err(ConfigError::InvalidPath(format!(
                "{} is reserved for the health check",
                self.ws_path
            )));
        }

        if self.max_message_size == 0 {
            return Err(ConfigError::InvalidLimit(
                "max_message_size cannot be 0".into(),
            ));
        }

        if self.idle_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(
                "idle_timeout_secs cannot be 0".into(),
            ));
        }

        if self.cors_origins.is_empty() {
            return Err(ConfigError::InvalidOrigin("no origins configured".into()));
        }
        for origin in &self.cors_origins {
            if origin != "*" && origin.parse::<HeaderValue>().is_err() {
                return Err(ConfigError::InvalidOrigin(origin.clone()));
            }
        }

        Ok(())
    }

    /// Server bind address
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Route that cannot be mounted
    #[error("invalid WebSocket path: {0}")]
    InvalidPath(String),
    /// Invalid size limit
    #[error("invalid limit: {0}")]
    InvalidLimit(String),
    /// Invalid timeout value
    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),
    /// Origin that is not a valid header value
    #[error("invalid CORS origin: {0}")]
    InvalidOrigin(String),
}
