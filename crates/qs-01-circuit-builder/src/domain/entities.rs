//! Core entities for the Circuit Builder

use super::value_objects::SkipReason;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One loosely-structured gate operation as sent by a client.
///
/// Deserialization never fails on content: a missing or mistyped field
/// simply reads as absent, and a non-object entry reads as an empty record.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GateOperationRecord {
    /// Gate type name (`"H"`, `"CNOT"`, `"RX"`, ...)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Target qubit index
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<i64>,
    /// Control qubit index (CNOT only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control: Option<i64>,
    /// Rotation angle in radians, 0 when absent
    pub angle: f64,
}

impl GateOperationRecord {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    pub fn with_target(mut self, target: i64) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_control(mut self, control: i64) -> Self {
        self.control = Some(control);
        self
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Read a record out of an arbitrary JSON value.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        Self {
            kind: object
                .get("type")
                .and_then(Value::as_str)
                .map(str::to_string),
            target: object.get("target").and_then(Value::as_i64),
            control: object.get("control").and_then(Value::as_i64),
            angle: object
                .get("angle")
                .and_then(Value::as_f64)
                .unwrap_or(0.0),
        }
    }
}

impl<'de> Deserialize<'de> for GateOperationRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// An operation that was dropped during a build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedOperation {
    /// Position in the input sequence
    pub position: usize,
    pub reason: SkipReason,
}

/// Summary of a build pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Number of gates appended to the circuit
    pub applied: usize,
    /// Operations that contributed nothing
    pub skipped: Vec<SkippedOperation>,
}

impl BuildReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}
