//! Domain layer for the Session Gateway.

pub mod config;
pub mod connection;
pub mod error;
pub mod payloads;
pub mod session;

pub use config::{ConfigError, GatewayConfig};
pub use connection::ConnectionId;
pub use error::GatewayError;
pub use payloads::{ErrorResponse, SimulationRequest, SimulationResponse, DEFAULT_NUM_QUBITS};
pub use session::Session;
