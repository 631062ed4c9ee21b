//! Gateway error types.
//!
//! Every request-level variant is turned into an `{"error": ...}` reply;
//! only `Config` and `Io` can stop the server.

use super::config::ConfigError;
use qs_02_state_evolution::EvolutionError;
use thiserror::Error;

/// Session gateway errors
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Frame was not a valid simulation request
    #[error("Invalid request: {0}")]
    Parse(String),

    /// Qubit count or circuit rejected by the engine
    #[error(transparent)]
    Simulation(#[from] EvolutionError),

    /// Frame exceeded the configured size limit
    #[error("Message too large: {size} bytes (max: {max})")]
    MessageTooLarge { size: usize, max: usize },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Socket bind or serve failure
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Parse(err.to_string())
    }
}

impl From<shared_types::SimulationError> for GatewayError {
    fn from(err: shared_types::SimulationError) -> Self {
        GatewayError::Simulation(err.into())
    }
}
