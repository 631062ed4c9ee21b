//! # Error Types
//!
//! Structural errors shared by every subsystem.

use thiserror::Error;

/// Errors raised when a circuit or state violates a structural precondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// Register size outside the supported range.
    #[error("Number of qubits must be between {min} and {max}, got {requested}")]
    InvalidQubitCount {
        requested: i64,
        min: usize,
        max: usize,
    },

    /// A gate references a qubit the register does not have.
    #[error("Qubit {qubit} out of range for a {num_qubits}-qubit register")]
    QubitOutOfRange { qubit: usize, num_qubits: usize },

    /// A two-qubit gate names the same qubit twice.
    #[error("Duplicate qubit {qubit} in two-qubit gate")]
    DuplicateQubit { qubit: usize },

    /// Amplitude buffer length does not match 2^N.
    #[error("Dimension mismatch: expected {expected} amplitudes, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
