//! Gate application on a raw amplitude buffer
//!
//! A 2×2 matrix on qubit `t` acts on every amplitude pair whose indices
//! differ only in bit `t`, which is the same as multiplying by
//! I ⊗ … ⊗ U ⊗ … ⊗ I. CNOT swaps the target-bit pairs whose control bit is 1.

use super::matrices::{single_qubit_matrix, Matrix2};
use shared_types::{Complex64, Gate};

/// Apply `matrix` to qubit `target`.
pub fn apply_single_qubit(amps: &mut [Complex64], target: usize, matrix: &Matrix2) {
    let stride = 1usize << target;

    for base in (0..amps.len()).step_by(stride << 1) {
        for offset in 0..stride {
            let i0 = base + offset;
            let i1 = i0 + stride;
            let a0 = amps[i0];
            let a1 = amps[i1];
            amps[i0] = matrix[0][0] * a0 + matrix[0][1] * a1;
            amps[i1] = matrix[1][0] * a0 + matrix[1][1] * a1;
        }
    }
}

/// Flip `target` on every basis state where `control` is 1.
pub fn apply_cnot(amps: &mut [Complex64], control: usize, target: usize) {
    let control_mask = 1usize << control;
    let target_mask = 1usize << target;

    for index in 0..amps.len() {
        // Visit each swapped pair once, from its target-bit-0 member.
        if index & control_mask != 0 && index & target_mask == 0 {
            amps.swap(index, index | target_mask);
        }
    }
}

/// Apply one validated gate.
pub fn apply_gate(amps: &mut [Complex64], gate: &Gate) {
    match single_qubit_matrix(gate) {
        Some((target, matrix)) => apply_single_qubit(amps, target, &matrix),
        None => {
            if let Gate::Cnot { control, target } = *gate {
                apply_cnot(amps, control, target);
            }
        }
    }
}
