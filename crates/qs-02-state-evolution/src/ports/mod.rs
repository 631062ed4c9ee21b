//! Ports module for State Evolution

pub mod inbound;

pub use inbound::StateEvolutionApi;
