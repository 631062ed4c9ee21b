//! Measurement probability distribution
//!
//! Labels are the N-bit binary rendering of the basis index, reversed so
//! that the leftmost character is qubit 0. Index `0b01` over two qubits (qubit
//! 0 set) is therefore labelled `"10"`.

use shared_types::{ProbabilityDistribution, StateVector};

/// |a_i|² for every basis index, all 2^N labels present.
pub fn probabilities(state: &StateVector) -> ProbabilityDistribution {
    let num_qubits = state.num_qubits();
    let entries = state
        .amplitudes()
        .iter()
        .enumerate()
        .map(|(index, amp)| (basis_label(index, num_qubits), amp.norm_sqr()))
        .collect();

    ProbabilityDistribution::new(entries)
}

/// Qubit-0-leftmost label for a basis index.
pub fn basis_label(index: usize, num_qubits: usize) -> String {
    format!("{:0width$b}", index, width = num_qubits)
        .chars()
        .rev()
        .collect()
}
