//! # QS-03 Observables
//!
//! Derives client-facing quantities from an evolved statevector.
//!
//! **Subsystem ID:** 03
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Outputs
//!
//! | Quantity | Definition |
//! |----------|------------|
//! | Probabilities | \|a_i\|² for all 2^N indices, labels reversed so qubit 0 is leftmost |
//! | Reduced state | ρ_q = Tr_{others}(\|ψ⟩⟨ψ\|) |
//! | Bloch vector | (Tr ρ_qσx, Tr ρ_qσy, Tr ρ_qσz), real parts |
//!
//! An entangled qubit has a Bloch vector shorter than 1. That is the
//! expected result of tracing out its partners.
//!
//! ## Module Structure
//!
//! ```text
//! qs-03-observables/
//! ├── domain/          # DensityMatrix, ReducedDensityMatrix, Pauli, Observables
//! ├── algorithms/      # Probabilities, partial trace, Bloch vectors
//! ├── ports/           # ObservableExtractorApi
//! └── service.rs       # ObservableExtractor
//! ```

#![warn(clippy::all)]

pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use algorithms::{
    basis_label, bloch_from_density, bloch_vector, bloch_vectors, density_matrix,
    pauli_expectation, probabilities, reduced_density_matrix,
};
pub use domain::{DensityMatrix, ObservableError, Observables, Pauli, ReducedDensityMatrix};
pub use ports::ObservableExtractorApi;
pub use service::ObservableExtractor;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
