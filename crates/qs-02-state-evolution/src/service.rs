//! State Evolution Engine
//!
//! An engine instance is bound to one register size for its lifetime.
//! Evolution itself holds no state between calls.

use crate::algorithms::apply_gate;
use crate::domain::errors::EvolutionError;
use crate::domain::invariants::{invariant_dimension, invariant_unit_norm, NORM_TOLERANCE};
use crate::ports::inbound::StateEvolutionApi;
use shared_types::{validate_qubit_count, Circuit, StateVector};
use tracing::{debug, debug_span, trace, warn};

/// Statevector engine for a fixed number of qubits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateEvolutionEngine {
    num_qubits: usize,
}

impl StateEvolutionEngine {
    /// Create an engine, rejecting register sizes outside 1–8.
    pub fn new(num_qubits: usize) -> Result<Self, EvolutionError> {
        let num_qubits = validate_qubit_count(num_qubits as i64)?;
        Ok(Self { num_qubits })
    }
}

impl StateEvolutionApi for StateEvolutionEngine {
    fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    fn evolve(&self, circuit: &Circuit) -> Result<StateVector, EvolutionError> {
        validate_qubit_count(circuit.num_qubits() as i64)?;
        if circuit.num_qubits() != self.num_qubits {
            return Err(EvolutionError::QubitCountMismatch {
                engine: self.num_qubits,
                circuit: circuit.num_qubits(),
            });
        }
        for gate in circuit.gates() {
            gate.validate(self.num_qubits)?;
        }

        let _span = debug_span!(
            "evolve",
            num_qubits = self.num_qubits,
            gate_count = circuit.len()
        )
        .entered();

        let mut amplitudes = StateVector::zero(self.num_qubits).into_amplitudes();
        for gate in circuit.gates() {
            trace!(gate = gate.name(), qubits = ?gate.qubits(), "Applying gate");
            apply_gate(&mut amplitudes, gate);
        }
        let state = StateVector::from_amplitudes(self.num_qubits, amplitudes)?;
        debug_assert!(invariant_dimension(&state));

        if !invariant_unit_norm(&state, NORM_TOLERANCE) {
            warn!(
                norm_sqr = state.norm_sqr(),
                "State norm drifted beyond tolerance"
            );
        }
        debug!("Evolution complete");

        Ok(state)
    }
}
