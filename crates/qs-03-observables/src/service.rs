//! Observable Extractor Service
//!
//! Main service implementing ObservableExtractorApi.

use crate::algorithms::{bloch_vector, bloch_vectors, probabilities};
use crate::domain::entities::Observables;
use crate::domain::errors::ObservableError;
use crate::ports::inbound::ObservableExtractorApi;
use shared_types::{BlochVector, ProbabilityDistribution, StateVector};
use tracing::debug;

/// Observable Extractor Service
///
/// Stateless; every method is a pure function of the state.
#[derive(Debug, Default, Clone, Copy)]
pub struct ObservableExtractor;

impl ObservableExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ObservableExtractorApi for ObservableExtractor {
    fn probabilities(&self, state: &StateVector) -> ProbabilityDistribution {
        probabilities(state)
    }

    fn bloch_vector(
        &self,
        state: &StateVector,
        qubit: usize,
    ) -> Result<BlochVector, ObservableError> {
        bloch_vector(state, qubit)
    }

    fn extract(&self, state: &StateVector) -> Observables {
        let observables = Observables {
            probabilities: probabilities(state),
            bloch_vectors: bloch_vectors(state),
        };

        debug!(
            num_qubits = state.num_qubits(),
            total_probability = observables.probabilities.total(),
            "Extracted observables"
        );

        observables
    }
}
