//! Fixed 2×2 gate matrices
//!
//! Row-major: `m[row][col]`. Rotations follow R_P(θ) = exp(−iθP/2) with no
//! global phase removed.

use num_complex::Complex64;
use shared_types::Gate;
use std::f64::consts::FRAC_1_SQRT_2;

/// A single-qubit unitary.
pub type Matrix2 = [[Complex64; 2]; 2];

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);

pub fn hadamard() -> Matrix2 {
    let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
    [[h, h], [h, -h]]
}

pub fn pauli_x() -> Matrix2 {
    [[ZERO, ONE], [ONE, ZERO]]
}

pub fn pauli_y() -> Matrix2 {
    [[ZERO, -I], [I, ZERO]]
}

pub fn pauli_z() -> Matrix2 {
    [[ONE, ZERO], [ZERO, -ONE]]
}

pub fn rx(theta: f64) -> Matrix2 {
    let c = Complex64::new((theta / 2.0).cos(), 0.0);
    let s = Complex64::new(0.0, -(theta / 2.0).sin());
    [[c, s], [s, c]]
}

pub fn ry(theta: f64) -> Matrix2 {
    let c = Complex64::new((theta / 2.0).cos(), 0.0);
    let s = Complex64::new((theta / 2.0).sin(), 0.0);
    [[c, -s], [s, c]]
}

pub fn rz(theta: f64) -> Matrix2 {
    [
        [Complex64::from_polar(1.0, -theta / 2.0), ZERO],
        [ZERO, Complex64::from_polar(1.0, theta / 2.0)],
    ]
}

/// Target qubit and matrix for single-qubit gates; `None` for CNOT.
pub fn single_qubit_matrix(gate: &Gate) -> Option<(usize, Matrix2)> {
    match *gate {
        Gate::H(q) => Some((q, hadamard())),
        Gate::X(q) => Some((q, pauli_x())),
        Gate::Y(q) => Some((q, pauli_y())),
        Gate::Z(q) => Some((q, pauli_z())),
        Gate::Rx { target, angle } => Some((target, rx(angle))),
        Gate::Ry { target, angle } => Some((target, ry(angle))),
        Gate::Rz { target, angle } => Some((target, rz(angle))),
        Gate::Cnot { .. } => None,
    }
}
