//! Domain module for the Circuit Builder
//!
//! Contains operation records, gate kinds and build reports.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
