//! # Core Domain Entities
//!
//! Typed gate applications and the circuit that orders them.
//!
//! ## Clusters
//!
//! - **Gates**: `Gate` (the fixed H/X/Y/Z/CNOT/RX/RY/RZ vocabulary)
//! - **Circuits**: `Circuit` (ordered gates over a fixed register size)

use crate::errors::SimulationError;

// =============================================================================
// CLUSTER A: GATES
// =============================================================================

/// A qubit position within a register.
pub type QubitIndex = usize;

/// A single validated gate application.
///
/// Rotation angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    /// Hadamard.
    H(QubitIndex),
    /// Pauli-X (bit flip).
    X(QubitIndex),
    /// Pauli-Y.
    Y(QubitIndex),
    /// Pauli-Z (phase flip).
    Z(QubitIndex),
    /// Controlled-X: flips `target` iff `control` is 1.
    Cnot {
        control: QubitIndex,
        target: QubitIndex,
    },
    /// Rotation about the X axis.
    Rx { target: QubitIndex, angle: f64 },
    /// Rotation about the Y axis.
    Ry { target: QubitIndex, angle: f64 },
    /// Rotation about the Z axis.
    Rz { target: QubitIndex, angle: f64 },
}

impl Gate {
    /// Canonical upper-case name of the gate kind.
    pub fn name(&self) -> &'static str {
        match self {
            Gate::H(_) => "H",
            Gate::X(_) => "X",
            Gate::Y(_) => "Y",
            Gate::Z(_) => "Z",
            Gate::Cnot { .. } => "CNOT",
            Gate::Rx { .. } => "RX",
            Gate::Ry { .. } => "RY",
            Gate::Rz { .. } => "RZ",
        }
    }

    /// Qubits touched by this gate, control first for CNOT.
    pub fn qubits(&self) -> Vec<QubitIndex> {
        match *self {
            Gate::H(q) | Gate::X(q) | Gate::Y(q) | Gate::Z(q) => vec![q],
            Gate::Cnot { control, target } => vec![control, target],
            Gate::Rx { target, .. } | Gate::Ry { target, .. } | Gate::Rz { target, .. } => {
                vec![target]
            }
        }
    }

    /// Check every index against the register size.
    pub fn validate(&self, num_qubits: usize) -> Result<(), SimulationError> {
        let qubits = self.qubits();
        for &qubit in &qubits {
            if qubit >= num_qubits {
                return Err(SimulationError::QubitOutOfRange { qubit, num_qubits });
            }
        }
        if let Gate::Cnot { control, target } = *self {
            if control == target {
                return Err(SimulationError::DuplicateQubit { qubit: control });
            }
        }
        Ok(())
    }
}

// =============================================================================
// CLUSTER B: CIRCUITS
// =============================================================================

/// Ordered gate applications over a fixed register.
///
/// The first gate in `gates()` is applied first. Every stored gate has
/// passed [`Gate::validate`] against `num_qubits`.
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    num_qubits: usize,
    gates: Vec<Gate>,
}

impl Circuit {
    /// Create an empty circuit. The register size is not range-checked here;
    /// the evolution engine rejects unsupported sizes.
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            gates: Vec::new(),
        }
    }

    /// Append a gate after validating its qubit indices.
    pub fn push(&mut self, gate: Gate) -> Result<(), SimulationError> {
        gate.validate(self.num_qubits)?;
        self.gates.push(gate);
        Ok(())
    }

    /// Builder-style append.
    pub fn with_gate(mut self, gate: Gate) -> Result<Self, SimulationError> {
        self.push(gate)?;
        Ok(self)
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}
