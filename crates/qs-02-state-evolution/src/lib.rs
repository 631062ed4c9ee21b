//! # QS-02 State Evolution
//!
//! Exact double-precision statevector evolution of a circuit, starting from
//! |0…0⟩.
//!
//! **Subsystem ID:** 02
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Indexing
//!
//! Qubit `q` is bit `q` of the amplitude index. A gate on qubit `t` is the
//! 2×2 matrix lifted to the full register by identities on every other qubit.
//!
//! ## Failure
//!
//! Only structural preconditions fail: a register outside 1–8 qubits, or a
//! circuit built for a different size than the engine. Gate application is
//! total.
//!
//! ## Module Structure
//!
//! ```text
//! qs-02-state-evolution/
//! ├── domain/          # EvolutionError, norm invariants
//! ├── algorithms/      # Gate matrices and in-place kernels
//! ├── ports/           # StateEvolutionApi
//! └── service.rs       # StateEvolutionEngine
//! ```

#![warn(clippy::all)]

pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use algorithms::{apply_cnot, apply_gate, apply_single_qubit, Matrix2};
pub use domain::{invariant_dimension, invariant_unit_norm, EvolutionError, NORM_TOLERANCE};
pub use ports::StateEvolutionApi;
pub use service::StateEvolutionEngine;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
