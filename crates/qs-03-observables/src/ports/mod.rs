//! Ports module for Observable extraction

pub mod inbound;

pub use inbound::ObservableExtractorApi;
