//! Runtime configuration from environment variables.
//!
//! # Environment Variables
//!
//! - `QS_HOST`: Bind address (default: 0.0.0.0)
//! - `QS_PORT`: Listening port (default: 8000)
//! - `QS_MAX_MESSAGE_SIZE`: Frame size limit in bytes (default: 65536)
//! - `QS_IDLE_TIMEOUT_SECS`: Idle connection timeout (default: 300)
//! - `QS_CORS_ORIGINS`: Comma-separated allowed origins (default: *)
//! - `QS_LOG_LEVEL` or `RUST_LOG`: Log filter (default: info)

use qs_04_session_gateway::GatewayConfig;
use std::env;
use std::str::FromStr;
use tracing::warn;

/// Default log filter
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Complete runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    /// Log filter directive, e.g. `info` or `qs_04_session_gateway=debug`
    pub log_level: String,
    pub gateway: GatewayConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            gateway: GatewayConfig::default(),
        }
    }
}

impl RuntimeConfig {
    /// Read the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut gateway = GatewayConfig::default();

        override_parsed(&lookup, "QS_HOST", &mut gateway.host);
        override_parsed(&lookup, "QS_PORT", &mut gateway.port);
        override_parsed(&lookup, "QS_MAX_MESSAGE_SIZE", &mut gateway.max_message_size);
        override_parsed(&lookup, "QS_IDLE_TIMEOUT_SECS", &mut gateway.idle_timeout_secs);

        if let Some(origins) = lookup("QS_CORS_ORIGINS") {
            let origins: Vec<String> = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
            if origins.is_empty() {
                warn!("QS_CORS_ORIGINS is empty, keeping default");
            } else {
                gateway.cors_origins = origins;
            }
        }

        Self {
            log_level: Self::log_level_from(&lookup),
            gateway,
        }
    }

    /// `QS_LOG_LEVEL`, then `RUST_LOG`, then `info`.
    pub fn log_level_from<F>(lookup: &F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup("QS_LOG_LEVEL")
            .or_else(|| lookup("RUST_LOG"))
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
    }
}

fn override_parsed<F, T>(lookup: &F, key: &str, slot: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse() {
        Ok(value) => *slot = value,
        Err(_) => warn!(key, value = %raw, "Ignoring unparseable environment value"),
    }
}
