//! Error types for State Evolution

use shared_types::SimulationError;
use thiserror::Error;

/// All errors that can occur while evolving a circuit
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvolutionError {
    /// The circuit cannot be evolved by this engine
    #[error("Invalid circuit: {0}")]
    InvalidCircuit(#[from] SimulationError),

    /// The circuit was built for a different register size
    #[error("Invalid circuit: engine has {engine} qubits, circuit has {circuit}")]
    QubitCountMismatch { engine: usize, circuit: usize },
}
