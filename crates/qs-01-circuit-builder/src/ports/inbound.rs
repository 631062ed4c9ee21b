//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::{BuildReport, GateOperationRecord};
use shared_types::Circuit;

/// Primary Circuit Builder API
pub trait CircuitBuilderApi: Send + Sync {
    /// Turn operation records into a circuit over `num_qubits` qubits.
    ///
    /// Never fails: malformed records are dropped.
    fn build(&self, num_qubits: usize, operations: &[GateOperationRecord]) -> Circuit;

    /// Same as [`CircuitBuilderApi::build`], also returning what was dropped.
    fn build_with_report(
        &self,
        num_qubits: usize,
        operations: &[GateOperationRecord],
    ) -> (Circuit, BuildReport);
}
