//! # Quantum State Entities
//!
//! The evolved amplitude vector and the observables derived from it.

use crate::errors::SimulationError;
use num_complex::Complex64;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Complex amplitudes of an N-qubit pure state, one per basis index.
///
/// Index bit `q` holds the value of qubit `q`. There is no in-place
/// mutation; evolution works on a raw buffer and wraps the result.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// The all-zero basis state |0…0⟩.
    pub fn zero(num_qubits: usize) -> Self {
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1usize << num_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            num_qubits,
            amplitudes,
        }
    }

    /// Wrap an existing amplitude buffer. The buffer must hold exactly
    /// 2^`num_qubits` entries; it is not renormalized.
    pub fn from_amplitudes(
        num_qubits: usize,
        amplitudes: Vec<Complex64>,
    ) -> Result<Self, SimulationError> {
        let expected = 1usize << num_qubits;
        if amplitudes.len() != expected {
            return Err(SimulationError::DimensionMismatch {
                expected,
                actual: amplitudes.len(),
            });
        }
        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// 2^N.
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Give up the state and take its amplitude buffer.
    pub fn into_amplitudes(self) -> Vec<Complex64> {
        self.amplitudes
    }

    /// Sum of squared magnitudes.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// True if |Σ|a|² − 1| ≤ `epsilon`.
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm_sqr() - 1.0).abs() <= epsilon
    }
}

/// Serialized as `[[re, im], ...]` in native index order.
impl Serialize for StateVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.amplitudes.len()))?;
        for amp in &self.amplitudes {
            seq.serialize_element(&[amp.re, amp.im])?;
        }
        seq.end()
    }
}

/// Measurement probabilities keyed by bit-string label.
///
/// Entries are kept in basis-index order; each label has one character per
/// qubit with qubit 0 leftmost.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProbabilityDistribution {
    entries: Vec<(String, f64)>,
}

impl ProbabilityDistribution {
    pub fn new(entries: Vec<(String, f64)>) -> Self {
        Self { entries }
    }

    /// Probability for a label, if present.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, p)| *p)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all probabilities.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, p)| p).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(l, p)| (l.as_str(), *p))
    }
}

/// Serialized as a JSON object `{ "<label>": p, ... }`.
impl Serialize for ProbabilityDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, probability) in &self.entries {
            map.serialize_entry(label, probability)?;
        }
        map.end()
    }
}

/// Pauli X/Y/Z expectation values of one qubit's reduced state.
///
/// Unit norm for a pure (unentangled) qubit, shorter when the qubit is
/// entangled with the rest of the register.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BlochVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl BlochVector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// True if the vector lies on the sphere surface within `epsilon`.
    pub fn is_pure(&self, epsilon: f64) -> bool {
        (self.norm() - 1.0).abs() <= epsilon
    }
}

/// Serialized as `[x, y, z]`.
impl Serialize for BlochVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.x, self.y, self.z].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BlochVector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [x, y, z] = <[f64; 3]>::deserialize(deserializer)?;
        Ok(Self { x, y, z })
    }
}
