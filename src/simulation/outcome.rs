//! Tagged result of a simulation run.

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::Pid;
use crate::trace::Trace;

/// Why a run stopped before every process finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundExceeded {
    /// Tick ceiling that was reached.
    pub ceiling: u64,
    /// Pids with remaining work, in input order.
    pub unfinished: Vec<Pid>,
}

/// Outcome of [`Simulator::run`](super::Simulator::run).
///
/// Both variants carry a full trace ending in a terminal snapshot. A
/// bound-exceeded trace reports unfinished processes with `None` metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SimulationOutcome {
    /// Every process finished within the ceiling.
    Completed { trace: Trace },
    /// The ceiling was reached first.
    BoundExceeded { trace: Trace, reason: BoundExceeded },
}

impl SimulationOutcome {
    /// Whether every process finished.
    pub fn is_completed(&self) -> bool {
        matches!(self, SimulationOutcome::Completed { .. })
    }

    /// The recorded trace, regardless of outcome.
    pub fn trace(&self) -> &Trace {
        match self {
            SimulationOutcome::Completed { trace } | SimulationOutcome::BoundExceeded { trace, .. } => trace,
        }
    }

    /// Consumes the outcome, keeping only the trace.
    pub fn into_trace(self) -> Trace {
        match self {
            SimulationOutcome::Completed { trace } | SimulationOutcome::BoundExceeded { trace, .. } => trace,
        }
    }

    /// Stop reason, if the ceiling was reached.
    pub fn bound_exceeded(&self) -> Option<&BoundExceeded> {
        match self {
            SimulationOutcome::Completed { .. } => None,
            SimulationOutcome::BoundExceeded { reason, .. } => Some(reason),
        }
    }

    /// Converts a bound-exceeded outcome into an error, discarding its trace.
    pub fn into_result(self) -> Result<Trace, SimulationError> {
        match self {
            SimulationOutcome::Completed { trace } => Ok(trace),
            SimulationOutcome::BoundExceeded { reason, .. } => Err(SimulationError::BoundExceeded {
                ceiling: reason.ceiling,
                unfinished: reason.unfinished,
            }),
        }
    }
}
