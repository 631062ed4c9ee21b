//! Domain module for Observable extraction
//!
//! Contains density matrices, Pauli observables and errors.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
