//! Domain invariants for State Evolution

use shared_types::StateVector;

/// Allowed drift of Σ|a|² away from 1 after evolution.
pub const NORM_TOLERANCE: f64 = 1e-9;

/// INVARIANT-1: Unit Norm
/// Unitary evolution preserves Σ|a|² = 1.
pub fn invariant_unit_norm(state: &StateVector, tolerance: f64) -> bool {
    state.is_normalized(tolerance)
}

/// INVARIANT-2: Dimension
/// A state over N qubits carries exactly 2^N amplitudes.
pub fn invariant_dimension(state: &StateVector) -> bool {
    state.dimension() == 1usize << state.num_qubits()
}
