//! # QS-04 Session Gateway
//!
//! WebSocket transport in front of the simulator core.
//!
//! **Subsystem ID:** 04
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Connection Lifecycle
//!
//! ```text
//! accept ──→ Session (empty engine slot)
//!   │
//!   └─ loop: frame ──→ SimulationPipeline ──→ response | {"error": ...}
//!               qs-01 build → qs-02 evolve → qs-03 extract
//!
//! close / error / idle ──→ Session dropped (cached engine released)
//! ```
//!
//! Each connection owns its session outright. Nothing is shared between
//! connections except the stateless pipeline.
//!
//! ## Routes
//!
//! | Route | Purpose |
//! |-------|---------|
//! | `GET /ws` | WebSocket upgrade (path configurable) |
//! | `GET /health` | `{"status": "ok", "version": ..}` |
//!
//! ## Module Structure
//!
//! ```text
//! qs-04-session-gateway/
//! ├── domain/          # Config, errors, payloads, Session, ConnectionId
//! ├── middleware/      # CORS
//! ├── ws/              # Per-connection frame loop
//! ├── pipeline.rs      # build → evolve → extract
//! └── service.rs       # axum router and server
//! ```

#![warn(clippy::all)]

pub mod domain;
pub mod middleware;
pub mod pipeline;
pub mod service;
pub mod ws;

// Re-exports
pub use domain::{
    ConfigError, ConnectionId, ErrorResponse, GatewayConfig, GatewayError, Session,
    SimulationRequest, SimulationResponse, DEFAULT_NUM_QUBITS,
};
pub use pipeline::SimulationPipeline;
pub use service::SessionGatewayService;
pub use ws::{FrameAction, WebSocketConfig, WebSocketHandler};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
