//! # QS-01 Circuit Builder
//!
//! Turns a client's ordered list of loosely-typed gate operation records
//! into a validated [`Circuit`](shared_types::Circuit).
//!
//! **Subsystem ID:** 01
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Vocabulary
//!
//! | type | requires | gate |
//! |------|----------|------|
//! | `H` `X` `Y` `Z` | target | single-qubit Clifford |
//! | `CNOT` | control, target | controlled-X |
//! | `RX` `RY` `RZ` (and `Rx*` `Ry*` `Rz*`) | target, angle | axis rotation |
//!
//! ## Leniency
//!
//! Unknown types, missing indices and out-of-range indices drop that one
//! record. The rest of the list still builds.
//!
//! ## Module Structure
//!
//! ```text
//! qs-01-circuit-builder/
//! ├── domain/          # GateOperationRecord, GateKind, BuildReport
//! ├── algorithms/      # Record translation and circuit assembly
//! ├── ports/           # CircuitBuilderApi
//! └── service.rs       # CircuitBuilderService
//! ```

#![warn(clippy::all)]

pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use algorithms::{build_circuit, build_circuit_with_report, translate};
pub use domain::{BuildReport, GateKind, GateOperationRecord, SkipReason, SkippedOperation};
pub use ports::CircuitBuilderApi;
pub use service::CircuitBuilderService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
