//! Record-to-circuit translation
//!
//! Each record contributes zero or one gate, in input order. Nothing here
//! returns an error: a bad record is reported and dropped.

use crate::domain::entities::{BuildReport, GateOperationRecord, SkippedOperation};
use crate::domain::value_objects::{GateKind, SkipReason};
use shared_types::{Circuit, Gate, QubitIndex};
use tracing::debug;

/// Build a circuit, discarding the report.
pub fn build_circuit(num_qubits: usize, operations: &[GateOperationRecord]) -> Circuit {
    build_circuit_with_report(num_qubits, operations).0
}

/// Build a circuit and describe what was dropped.
pub fn build_circuit_with_report(
    num_qubits: usize,
    operations: &[GateOperationRecord],
) -> (Circuit, BuildReport) {
    let mut circuit = Circuit::new(num_qubits);
    let mut report = BuildReport::default();

    for (position, record) in operations.iter().enumerate() {
        let outcome = translate(record, num_qubits).and_then(|gate| {
            circuit.push(gate).map_err(|_| match gate {
                Gate::Cnot { control, .. } => SkipReason::DuplicateQubit(control),
                _ => SkipReason::IndexOutOfRange(gate.qubits()[0] as i64),
            })
        });

        match outcome {
            Ok(()) => report.applied += 1,
            Err(reason) => {
                debug!(position, ?reason, "Skipping gate operation");
                report.skipped.push(SkippedOperation { position, reason });
            }
        }
    }

    (circuit, report)
}

/// Translate a single record into a typed gate.
pub fn translate(record: &GateOperationRecord, num_qubits: usize) -> Result<Gate, SkipReason> {
    let kind = record
        .kind
        .as_deref()
        .and_then(GateKind::parse)
        .ok_or_else(|| SkipReason::UnknownKind(record.kind.clone()))?;

    let target = resolve_index(record.target, num_qubits).map_err(|e| match e {
        None => SkipReason::MissingTarget,
        Some(raw) => SkipReason::IndexOutOfRange(raw),
    })?;

    let gate = match kind {
        GateKind::H => Gate::H(target),
        GateKind::X => Gate::X(target),
        GateKind::Y => Gate::Y(target),
        GateKind::Z => Gate::Z(target),
        GateKind::Cnot => {
            let control = resolve_index(record.control, num_qubits).map_err(|e| match e {
                None => SkipReason::MissingControl,
                Some(raw) => SkipReason::IndexOutOfRange(raw),
            })?;
            if control == target {
                return Err(SkipReason::DuplicateQubit(control));
            }
            Gate::Cnot { control, target }
        }
        GateKind::Rx => Gate::Rx {
            target,
            angle: record.angle,
        },
        GateKind::Ry => Gate::Ry {
            target,
            angle: record.angle,
        },
        GateKind::Rz => Gate::Rz {
            target,
            angle: record.angle,
        },
    };

    Ok(gate)
}

/// `Err(None)` when absent, `Err(Some(raw))` when outside `[0, num_qubits)`.
fn resolve_index(raw: Option<i64>, num_qubits: usize) -> Result<QubitIndex, Option<i64>> {
    let raw = raw.ok_or(None)?;
    if raw < 0 || raw as u64 >= num_qubits as u64 {
        return Err(Some(raw));
    }
    Ok(raw as QubitIndex)
}
