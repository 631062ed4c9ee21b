//! Algorithms for Observable extraction
//!
//! - probabilities: |a|² with qubit-0-leftmost labels
//! - partial_trace: Full and single-qubit reduced density matrices
//! - bloch: Pauli expectations and per-qubit Bloch vectors

pub mod bloch;
pub mod partial_trace;
pub mod probabilities;

pub use bloch::{bloch_from_density, bloch_vector, bloch_vectors, pauli_expectation};
pub use partial_trace::{density_matrix, reduced_density_matrix};
pub use probabilities::{basis_label, probabilities};
