//! Policy identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::rules;
use super::PolicySelector;

/// The closed set of supported scheduling policies.
///
/// Identifiers match the wire names `fcfs`, `sjf`, `srtf`, `priority_np`,
/// `priority_p` and `round_robin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    #[serde(rename = "fcfs")]
    Fcfs,
    #[serde(rename = "sjf")]
    Sjf,
    #[serde(rename = "srtf")]
    Srtf,
    #[serde(rename = "priority_np")]
    PriorityNonPreemptive,
    #[serde(rename = "priority_p")]
    PriorityPreemptive,
    #[serde(rename = "round_robin")]
    RoundRobin,
}

/// Unrecognized policy identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scheduling policy: {0}")]
pub struct ParsePolicyError(pub String);

impl Policy {
    /// Every policy, in presentation order.
    pub const ALL: [Policy; 6] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::Srtf,
        Policy::PriorityNonPreemptive,
        Policy::PriorityPreemptive,
        Policy::RoundRobin,
    ];

    /// Wire identifier.
    pub fn id(self) -> &'static str {
        match self {
            Policy::Fcfs => "fcfs",
            Policy::Sjf => "sjf",
            Policy::Srtf => "srtf",
            Policy::PriorityNonPreemptive => "priority_np",
            Policy::PriorityPreemptive => "priority_p",
            Policy::RoundRobin => "round_robin",
        }
    }

    /// Selection rule implementing this policy.
    pub fn selector(self) -> &'static dyn PolicySelector {
        match self {
            Policy::Fcfs => &rules::Fcfs,
            Policy::Sjf => &rules::Sjf,
            Policy::Srtf => &rules::Srtf,
            Policy::PriorityNonPreemptive => &rules::PriorityNonPreemptive,
            Policy::PriorityPreemptive => &rules::PriorityPreemptive,
            Policy::RoundRobin => &rules::RoundRobin,
        }
    }

    /// Whether the policy needs a time quantum.
    pub fn uses_quantum(self) -> bool {
        matches!(self, Policy::RoundRobin)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Policy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Policy::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| ParsePolicyError(s.to_string()))
    }
}
