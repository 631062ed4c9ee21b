//! Simulation pipeline: build → evolve → extract.

use crate::domain::error::GatewayError;
use crate::domain::payloads::{ErrorResponse, SimulationRequest, SimulationResponse};
use crate::domain::session::Session;
use qs_01_circuit_builder::{CircuitBuilderApi, CircuitBuilderService};
use qs_02_state_evolution::StateEvolutionApi;
use qs_03_observables::{ObservableExtractor, ObservableExtractorApi};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Runs one request against a session's engine.
///
/// Holds no per-connection state, so one instance is shared by all
/// connections.
#[derive(Clone)]
pub struct SimulationPipeline {
    builder: Arc<dyn CircuitBuilderApi>,
    extractor: Arc<dyn ObservableExtractorApi>,
}

impl Default for SimulationPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationPipeline {
    pub fn new() -> Self {
        Self::with_components(
            Arc::new(CircuitBuilderService::new()),
            Arc::new(ObservableExtractor::new()),
        )
    }

    pub fn with_components(
        builder: Arc<dyn CircuitBuilderApi>,
        extractor: Arc<dyn ObservableExtractorApi>,
    ) -> Self {
        Self { builder, extractor }
    }

    /// Run one request. Malformed operations are dropped by the builder;
    /// only a bad qubit count fails the request.
    pub fn run(
        &self,
        session: &mut Session,
        request: &SimulationRequest,
    ) -> Result<SimulationResponse, GatewayError> {
        let started = Instant::now();
        let connection_id = session.connection_id();

        let engine = session.engine_for(request.num_qubits)?;
        let num_qubits = engine.num_qubits();

        let (circuit, report) = self.builder.build_with_report(num_qubits, &request.operations);
        let state = engine.evolve(&circuit)?;
        let observables = self.extractor.extract(&state);

        session.record_request();
        debug!(
            connection_id = %connection_id,
            num_qubits,
            gate_count = report.applied,
            skipped = report.skipped_count(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "Simulation complete"
        );

        Ok(SimulationResponse {
            num_qubits,
            probabilities: observables.probabilities,
            bloch_vectors: observables.bloch_vectors,
            state_vector: state,
        })
    }

    /// Parse, run and serialize one text frame.
    ///
    /// Always yields a reply: either a response or an `{"error": ...}` body.
    pub fn handle_text(&self, session: &mut Session, text: &str) -> String {
        match self.try_handle_text(session, text) {
            Ok(body) => body,
            Err(err) => {
                warn!(
                    connection_id = %session.connection_id(),
                    error = %err,
                    "Simulation request failed"
                );
                ErrorResponse::new(err.to_string()).to_json()
            }
        }
    }

    fn try_handle_text(&self, session: &mut Session, text: &str) -> Result<String, GatewayError> {
        let request: SimulationRequest = serde_json::from_str(text)?;
        let response = self.run(session, &request)?;
        Ok(serde_json::to_string(&response)?)
    }
}
