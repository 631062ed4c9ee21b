//! Circuit Builder Service
//!
//! Main service implementing CircuitBuilderApi.

use crate::algorithms::build_circuit_with_report;
use crate::domain::entities::{BuildReport, GateOperationRecord};
use crate::ports::inbound::CircuitBuilderApi;
use shared_types::Circuit;
use tracing::debug;

/// Circuit Builder Service
///
/// Stateless; one instance can serve any number of requests.
#[derive(Debug, Default, Clone, Copy)]
pub struct CircuitBuilderService;

impl CircuitBuilderService {
    pub fn new() -> Self {
        Self
    }
}

impl CircuitBuilderApi for CircuitBuilderService {
    fn build(&self, num_qubits: usize, operations: &[GateOperationRecord]) -> Circuit {
        self.build_with_report(num_qubits, operations).0
    }

    fn build_with_report(
        &self,
        num_qubits: usize,
        operations: &[GateOperationRecord],
    ) -> (Circuit, BuildReport) {
        let (circuit, report) = build_circuit_with_report(num_qubits, operations);

        debug!(
            num_qubits,
            operations = operations.len(),
            applied = report.applied,
            skipped = report.skipped_count(),
            "Built circuit"
        );

        (circuit, report)
    }
}
