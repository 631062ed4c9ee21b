//! Core entities for Observable extraction

use num_complex::Complex64;
use serde::Serialize;
use shared_types::{BlochVector, ProbabilityDistribution};

/// Single-qubit Pauli observables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pauli {
    X,
    Y,
    Z,
}

impl Pauli {
    /// Row-major 2×2 matrix.
    pub fn matrix(&self) -> [[Complex64; 2]; 2] {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        let i = Complex64::new(0.0, 1.0);
        match self {
            Pauli::X => [[zero, one], [one, zero]],
            Pauli::Y => [[zero, -i], [i, zero]],
            Pauli::Z => [[one, zero], [zero, -one]],
        }
    }
}

/// Full density matrix |ψ⟩⟨ψ| of a register, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityMatrix {
    dimension: usize,
    entries: Vec<Complex64>,
}

impl DensityMatrix {
    pub fn new(dimension: usize, entries: Vec<Complex64>) -> Self {
        debug_assert_eq!(entries.len(), dimension * dimension);
        Self { dimension, entries }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.entries[row * self.dimension + col]
    }

    pub fn trace(&self) -> Complex64 {
        (0..self.dimension).map(|k| self.get(k, k)).sum()
    }

    /// The 2×2 matrix, if this is a single-qubit density matrix.
    pub fn as_single_qubit(&self) -> Option<ReducedDensityMatrix> {
        (self.dimension == 2).then(|| {
            ReducedDensityMatrix::new([
                [self.get(0, 0), self.get(0, 1)],
                [self.get(1, 0), self.get(1, 1)],
            ])
        })
    }
}

/// 2×2 density matrix of one qubit, possibly mixed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReducedDensityMatrix {
    /// `rho[a][b]` = ⟨a|ρ|b⟩
    pub rho: [[Complex64; 2]; 2],
}

impl ReducedDensityMatrix {
    pub fn new(rho: [[Complex64; 2]; 2]) -> Self {
        Self { rho }
    }

    pub fn trace(&self) -> Complex64 {
        self.rho[0][0] + self.rho[1][1]
    }

    /// Tr(ρ²): 1 for a pure state, 1/2 for the maximally mixed state.
    pub fn purity(&self) -> f64 {
        let mut sum = Complex64::new(0.0, 0.0);
        for a in 0..2 {
            for b in 0..2 {
                sum += self.rho[a][b] * self.rho[b][a];
            }
        }
        sum.re
    }
}

/// Everything derived from one state for a response.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Observables {
    pub probabilities: ProbabilityDistribution,
    pub bloch_vectors: Vec<BlochVector>,
}
