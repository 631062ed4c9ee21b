//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::Observables;
use crate::domain::errors::ObservableError;
use shared_types::{BlochVector, ProbabilityDistribution, StateVector};

/// Primary Observable Extractor API
pub trait ObservableExtractorApi: Send + Sync {
    /// Probability of every basis state, labelled qubit 0 leftmost.
    fn probabilities(&self, state: &StateVector) -> ProbabilityDistribution;

    /// Bloch vector of one qubit's reduced state.
    fn bloch_vector(
        &self,
        state: &StateVector,
        qubit: usize,
    ) -> Result<BlochVector, ObservableError>;

    /// Probabilities plus the Bloch vector of every qubit.
    fn extract(&self, state: &StateVector) -> Observables;
}
