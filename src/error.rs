//! Error types.

use thiserror::Error;

use crate::models::Pid;
use crate::validation::ValidationError;

/// Errors returned by the simulator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The process table or configuration was rejected before simulating.
    #[error("invalid configuration: {}", join_messages(.0))]
    InvalidConfiguration(Vec<ValidationError>),

    /// The tick ceiling was reached with work left.
    #[error("tick ceiling of {ceiling} reached with {} unfinished process(es)", .unfinished.len())]
    BoundExceeded {
        /// Configured ceiling.
        ceiling: u64,
        /// Pids that still had remaining time.
        unfinished: Vec<Pid>,
    },
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
