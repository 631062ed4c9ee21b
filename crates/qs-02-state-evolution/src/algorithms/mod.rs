//! Algorithms for State Evolution
//!
//! - matrices: Fixed single-qubit unitaries
//! - apply: Amplitude-pair and controlled-swap gate kernels

pub mod apply;
pub mod matrices;

pub use apply::{apply_cnot, apply_gate, apply_single_qubit};
pub use matrices::{single_qubit_matrix, Matrix2};
