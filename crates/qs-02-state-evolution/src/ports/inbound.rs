//! Inbound Ports (Driving Ports / API)

use crate::domain::errors::EvolutionError;
use shared_types::{Circuit, StateVector};

/// Primary State Evolution API
pub trait StateEvolutionApi: Send + Sync {
    /// Register size this engine was created for.
    fn num_qubits(&self) -> usize;

    /// Evolve |0…0⟩ through every gate of `circuit`, first gate first.
    ///
    /// The circuit is not mutated.
    fn evolve(&self, circuit: &Circuit) -> Result<StateVector, EvolutionError>;
}
