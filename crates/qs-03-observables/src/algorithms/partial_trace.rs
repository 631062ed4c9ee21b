//! Density matrices and single-qubit partial trace
//!
//! For qubit `q`, ρ_ab = Σ_rest ψ(q=a, rest) · conj(ψ(q=b, rest)); that is,
//! every qubit except `q` is traced out of |ψ⟩⟨ψ|.

use crate::domain::entities::{DensityMatrix, ReducedDensityMatrix};
use crate::domain::errors::ObservableError;
use num_complex::Complex64;
use shared_types::StateVector;

/// Full outer product |ψ⟩⟨ψ|.
pub fn density_matrix(state: &StateVector) -> DensityMatrix {
    let amps = state.amplitudes();
    let dimension = amps.len();
    let mut entries = Vec::with_capacity(dimension * dimension);
    for row in amps {
        for col in amps {
            entries.push(row * col.conj());
        }
    }
    DensityMatrix::new(dimension, entries)
}

/// Reduced density matrix of `qubit` with every other qubit traced out.
pub fn reduced_density_matrix(
    state: &StateVector,
    qubit: usize,
) -> Result<ReducedDensityMatrix, ObservableError> {
    let num_qubits = state.num_qubits();
    if qubit >= num_qubits {
        return Err(ObservableError::QubitOutOfRange { qubit, num_qubits });
    }
    Ok(trace_out_others(state, qubit))
}

/// Partial trace for a qubit already known to be in range.
pub(crate) fn trace_out_others(state: &StateVector, qubit: usize) -> ReducedDensityMatrix {
    let mask = 1usize << qubit;
    let amps = state.amplitudes();
    let mut rho = [[Complex64::new(0.0, 0.0); 2]; 2];

    for index in (0..amps.len()).filter(|i| i & mask == 0) {
        let pair = [amps[index], amps[index | mask]];
        for a in 0..2 {
            for b in 0..2 {
                rho[a][b] += pair[a] * pair[b].conj();
            }
        }
    }

    ReducedDensityMatrix::new(rho)
}
