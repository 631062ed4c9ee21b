//! Pauli expectation values and Bloch vectors

use super::partial_trace::{density_matrix, trace_out_others};
use crate::domain::entities::{Pauli, ReducedDensityMatrix};
use crate::domain::errors::ObservableError;
use num_complex::Complex64;
use shared_types::{BlochVector, StateVector};

/// Re Tr(ρ·σ). The imaginary part vanishes for Hermitian ρ and is dropped.
pub fn pauli_expectation(rho: &ReducedDensityMatrix, pauli: Pauli) -> f64 {
    let sigma = pauli.matrix();
    let mut trace = Complex64::new(0.0, 0.0);
    for a in 0..2 {
        for b in 0..2 {
            trace += rho.rho[a][b] * sigma[b][a];
        }
    }
    trace.re
}

/// Bloch vector of a single-qubit density matrix.
pub fn bloch_from_density(rho: &ReducedDensityMatrix) -> BlochVector {
    BlochVector::new(
        pauli_expectation(rho, Pauli::X),
        pauli_expectation(rho, Pauli::Y),
        pauli_expectation(rho, Pauli::Z),
    )
}

/// Bloch vector of `qubit` within `state`.
///
/// A one-qubit state uses its own density matrix directly; larger states
/// trace out every other qubit first.
pub fn bloch_vector(state: &StateVector, qubit: usize) -> Result<BlochVector, ObservableError> {
    let num_qubits = state.num_qubits();
    if qubit >= num_qubits {
        return Err(ObservableError::QubitOutOfRange { qubit, num_qubits });
    }
    Ok(bloch_in_range(state, qubit))
}

/// Bloch vectors for qubits 0..N−1, one per qubit.
pub fn bloch_vectors(state: &StateVector) -> Vec<BlochVector> {
    (0..state.num_qubits())
        .map(|q| bloch_in_range(state, q))
        .collect()
}

fn bloch_in_range(state: &StateVector, qubit: usize) -> BlochVector {
    let rho = density_matrix_if_single(state).unwrap_or_else(|| trace_out_others(state, qubit));
    bloch_from_density(&rho)
}

fn density_matrix_if_single(state: &StateVector) -> Option<ReducedDensityMatrix> {
    if state.num_qubits() != 1 {
        return None;
    }
    density_matrix(state).as_single_qubit()
}
