//! Wire messages exchanged over the WebSocket.
//!
//! Field names are camelCase on the wire.

use qs_01_circuit_builder::GateOperationRecord;
use serde::{Deserialize, Deserializer, Serialize};
use shared_types::{BlochVector, ProbabilityDistribution, StateVector};

/// Register size used when a request omits `numQubits`.
pub const DEFAULT_NUM_QUBITS: i64 = 2;

fn default_num_qubits() -> i64 {
    DEFAULT_NUM_QUBITS
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<GateOperationRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<GateOperationRecord>>::deserialize(deserializer)?.unwrap_or_default())
}

/// One simulation step requested by the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// Unvalidated; the session checks the 1–8 range.
    #[serde(default = "default_num_qubits")]
    pub num_qubits: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub operations: Vec<GateOperationRecord>,
}

impl SimulationRequest {
    pub fn new(num_qubits: i64, operations: Vec<GateOperationRecord>) -> Self {
        Self {
            num_qubits,
            operations,
        }
    }
}

/// Successful simulation reply.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResponse {
    pub num_qubits: usize,
    pub probabilities: ProbabilityDistribution,
    pub bloch_vectors: Vec<BlochVector>,
    /// Amplitudes in the engine's index order (qubit 0 is the low bit)
    pub state_vector: StateVector,
}

/// Failure reply, sent in place of a [`SimulationResponse`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// Serialized form; cannot fail for a single string field.
    pub fn to_json(&self) -> String {
        serde_json::json!({ "error": self.error }).to_string()
    }
}
