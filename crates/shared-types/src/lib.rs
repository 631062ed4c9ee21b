//! # Shared Types Crate
//!
//! This crate contains the domain entities passed between the simulator
//! subsystems:
//!
//! ```text
//! qs-01 Circuit Builder ──Circuit──→ qs-02 State Evolution
//!                                           │
//!                                      StateVector
//!                                           ↓
//!                                 qs-03 Observable Extractor
//!                                           │
//!                       ProbabilityDistribution + BlochVector
//! ```
//!
//! ## Qubit Ordering
//!
//! Qubit `q` is bit `q` of a basis-state index (qubit 0 is the least
//! significant bit). Every crate in the workspace uses this convention for
//! amplitudes; only probability labels are rendered with qubit 0 leftmost.

pub mod entities;
pub mod errors;
pub mod state;

pub use entities::*;
pub use errors::*;
pub use num_complex::Complex64;
pub use state::*;

/// Smallest supported register size.
pub const MIN_QUBITS: usize = 1;

/// Largest supported register size (2^8 = 256 amplitudes).
pub const MAX_QUBITS: usize = 8;

/// Validate a requested qubit count against the supported range.
///
/// Accepts a signed value because requests arrive as untyped JSON numbers.
pub fn validate_qubit_count(requested: i64) -> Result<usize, SimulationError> {
    if requested < MIN_QUBITS as i64 || requested > MAX_QUBITS as i64 {
        return Err(SimulationError::InvalidQubitCount {
            requested,
            min: MIN_QUBITS,
            max: MAX_QUBITS,
        });
    }
    Ok(requested as usize)
}
