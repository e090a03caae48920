//! Simulation run configuration.

use serde::{Deserialize, Serialize};

use crate::policy::Policy;

/// Default round-robin time quantum (ticks).
pub const DEFAULT_QUANTUM: u64 = 2;

/// Default safety ceiling on simulated ticks.
pub const DEFAULT_TICK_CEILING: u64 = 200;

/// Parameters of one simulation run.
///
/// # Example
///
/// ```
/// use u_cpusched::policy::Policy;
/// use u_cpusched::simulation::SimulationConfig;
///
/// let config = SimulationConfig::new(Policy::RoundRobin)
///     .with_quantum(3)
///     .with_tick_ceiling(500);
/// assert_eq!(config.quantum, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationConfig {
    /// Scheduling policy.
    pub policy: Policy,
    /// Round-robin time quantum. Ignored by other policies.
    #[serde(default = "default_quantum")]
    pub quantum: u64,
    /// The run stops once the clock reaches this value.
    #[serde(default = "default_tick_ceiling")]
    pub tick_ceiling: u64,
}

fn default_quantum() -> u64 {
    DEFAULT_QUANTUM
}

fn default_tick_ceiling() -> u64 {
    DEFAULT_TICK_CEILING
}

impl SimulationConfig {
    /// Creates a configuration with the default quantum and ceiling.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            quantum: DEFAULT_QUANTUM,
            tick_ceiling: DEFAULT_TICK_CEILING,
        }
    }

    /// Sets the round-robin time quantum.
    pub fn with_quantum(mut self, quantum: u64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the tick ceiling.
    pub fn with_tick_ceiling(mut self, tick_ceiling: u64) -> Self {
        self.tick_ceiling = tick_ceiling;
        self
    }
}

impl From<Policy> for SimulationConfig {
    fn from(policy: Policy) -> Self {
        Self::new(policy)
    }
}
