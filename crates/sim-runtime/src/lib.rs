//! # Simulator Runtime
//!
//! Wiring for the `sim-runtime` binary: environment configuration and
//! logging setup. The gateway itself lives in `qs-04-session-gateway`.

pub mod config;

pub use config::RuntimeConfig;
