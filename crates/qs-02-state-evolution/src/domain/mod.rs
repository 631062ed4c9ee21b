//! Domain module for State Evolution
//!
//! Contains errors and the norm/dimension invariants.

pub mod errors;
pub mod invariants;

pub use errors::*;
pub use invariants::*;
