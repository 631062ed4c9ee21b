//! Per-connection session state.
//!
//! A session is owned by exactly one connection task, so its engine slot
//! needs no locking. Dropping the session releases the cached engine.

use super::connection::ConnectionId;
use qs_02_state_evolution::{EvolutionError, StateEvolutionApi, StateEvolutionEngine};
use shared_types::validate_qubit_count;
use tracing::info;

/// State carried between requests on one connection.
#[derive(Debug, Default)]
pub struct Session {
    connection_id: ConnectionId,
    engine: Option<StateEvolutionEngine>,
    requests_served: u64,
}

impl Session {
    pub fn new(connection_id: ConnectionId) -> Self {
        Self {
            connection_id,
            engine: None,
            requests_served: 0,
        }
    }

    pub fn connection_id(&self) -> ConnectionId {
        self.connection_id
    }

    /// Qubit count of the cached engine, if any.
    pub fn cached_qubits(&self) -> Option<usize> {
        self.engine.as_ref().map(StateEvolutionEngine::num_qubits)
    }

    pub fn requests_served(&self) -> u64 {
        self.requests_served
    }

    pub(crate) fn record_request(&mut self) {
        self.requests_served += 1;
    }

    /// Engine for `requested` qubits, re-initialized only on a count change.
    ///
    /// The count is validated before the slot is touched: a rejected count
    /// leaves the previously cached engine in place.
    pub fn engine_for(&mut self, requested: i64) -> Result<&StateEvolutionEngine, EvolutionError> {
        let num_qubits = validate_qubit_count(requested)?;

        let engine = match self.engine.take() {
            Some(engine) if engine.num_qubits() == num_qubits => engine,
            previous => match StateEvolutionEngine::new(num_qubits) {
                Ok(engine) => {
                    info!(
                        connection_id = %self.connection_id,
                        previous = ?previous.as_ref().map(StateEvolutionEngine::num_qubits),
                        num_qubits,
                        "Initialized evolution engine"
                    );
                    engine
                }
                Err(err) => {
                    self.engine = previous;
                    return Err(err);
                }
            },
        };

        Ok(self.engine.insert(engine))
    }
}
