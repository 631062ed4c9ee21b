//! Error types for Observable extraction

use thiserror::Error;

/// All errors that can occur while extracting observables
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObservableError {
    /// Requested qubit is not part of the state
    #[error("Qubit {qubit} out of range for a {num_qubits}-qubit state")]
    QubitOutOfRange { qubit: usize, num_qubits: usize },
}
