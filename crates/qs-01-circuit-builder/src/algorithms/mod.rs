//! Circuit construction algorithms

pub mod build;

pub use build::{build_circuit, build_circuit_with_report, translate};
