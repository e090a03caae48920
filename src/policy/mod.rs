//! Scheduling policies and their selection rules.
//!
//! Each policy is a [`PolicySelector`]: an explicit comparator over
//! runtime states plus a declaration of when it may preempt. The
//! simulation loop owns the queue bookkeeping and asks the selector
//! only which candidate ranks first.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::policy::{Policy, Preemption};
//!
//! let policy: Policy = "srtf".parse().unwrap();
//! assert_eq!(policy.selector().preemption(), Preemption::EveryTick);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod id;
pub mod rules;

pub use id::{ParsePolicyError, Policy};

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::models::{Pid, ProcessRuntimeState};

/// When a policy may take the CPU away from the running process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preemption {
    /// Runs to completion once dispatched.
    Never,
    /// Re-evaluated from scratch on every tick.
    EveryTick,
    /// Forced off the CPU after a fixed number of consecutive ticks.
    QuantumExpiry,
}

/// Where a policy draws its candidates from at selection time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSet {
    /// Only processes waiting in the ready queue.
    ReadyQueue,
    /// Every arrived, unfinished process, including the running one.
    AllArrived,
}

/// Selection rule for one scheduling policy.
///
/// # Ordering Convention
/// `compare(a, b) == Less` means `a` should get the CPU before `b`.
/// Rules must be total and deterministic; every built-in rule ends its
/// key with `pid` so no two distinct processes compare equal, except
/// round robin, which keeps pure queue order.
pub trait PolicySelector: Send + Sync + Debug {
    /// Short policy name (e.g., "FCFS", "SRTF").
    fn name(&self) -> &'static str;

    /// Orders two candidates; smaller goes first.
    fn compare(&self, a: &ProcessRuntimeState, b: &ProcessRuntimeState) -> Ordering;

    /// Preemption behavior.
    fn preemption(&self) -> Preemption;

    /// Explanation recorded when `pid` is dispatched.
    fn explain_dispatch(&self, pid: Pid) -> String;

    /// Candidate source implied by the preemption behavior.
    fn candidate_set(&self) -> CandidateSet {
        match self.preemption() {
            Preemption::EveryTick => CandidateSet::AllArrived,
            Preemption::Never | Preemption::QuantumExpiry => CandidateSet::ReadyQueue,
        }
    }

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
