//! Ports module for the Circuit Builder

pub mod inbound;

pub use inbound::CircuitBuilderApi;
