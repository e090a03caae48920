//! Built-in selection rules.
//!
//! # Categories
//!
//! - **Non-preemptive**: FCFS, SJF, Priority (NP)
//! - **Preemptive every tick**: SRTF, Priority (P)
//! - **Time-sliced**: RR
//!
//! # Key Convention
//! Each rule compares a lexicographic key, smallest first. Keys end in
//! `arrival_time, pid` so ties resolve identically across policies.

use std::cmp::Ordering;

use super::{PolicySelector, Preemption};
use crate::models::{Pid, ProcessRuntimeState};

/// Shared `arrival_time, pid` tail of every ranked key.
#[inline]
fn by_arrival_then_pid(a: &ProcessRuntimeState, b: &ProcessRuntimeState) -> Ordering {
    a.arrival_time()
        .cmp(&b.arrival_time())
        .then_with(|| a.pid().cmp(&b.pid()))
}

// ======================== Non-preemptive ========================

/// First-Come, First-Served.
///
/// Key: `arrival_time, pid`.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl PolicySelector for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn compare(&self, a: &ProcessRuntimeState, b: &ProcessRuntimeState) -> Ordering {
        by_arrival_then_pid(a, b)
    }

    fn preemption(&self) -> Preemption {
        Preemption::Never
    }

    fn explain_dispatch(&self, pid: Pid) -> String {
        format!("FCFS: P{pid} started.")
    }

    fn description(&self) -> &'static str {
        "First-Come, First-Served"
    }
}

/// Shortest Job First (non-preemptive).
///
/// Key: `burst_time, arrival_time, pid`. Uses the full burst, not the
/// remaining time, since a dispatched job always runs to completion.
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl PolicySelector for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn compare(&self, a: &ProcessRuntimeState, b: &ProcessRuntimeState) -> Ordering {
        a.burst_time()
            .cmp(&b.burst_time())
            .then_with(|| by_arrival_then_pid(a, b))
    }

    fn preemption(&self) -> Preemption {
        Preemption::Never
    }

    fn explain_dispatch(&self, pid: Pid) -> String {
        format!("SJF: P{pid} started (Shortest Burst).")
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Priority scheduling, non-preemptive.
///
/// Key: `priority, arrival_time, pid` (lower priority value first).
#[derive(Debug, Clone, Copy)]
pub struct PriorityNonPreemptive;

impl PolicySelector for PriorityNonPreemptive {
    fn name(&self) -> &'static str {
        "Priority (NP)"
    }

    fn compare(&self, a: &ProcessRuntimeState, b: &ProcessRuntimeState) -> Ordering {
        a.priority()
            .cmp(&b.priority())
            .then_with(|| by_arrival_then_pid(a, b))
    }

    fn preemption(&self) -> Preemption {
        Preemption::Never
    }

    fn explain_dispatch(&self, pid: Pid) -> String {
        format!("Priority (NP): P{pid} started.")
    }

    fn description(&self) -> &'static str {
        "Priority, non-preemptive"
    }
}

// ======================== Preemptive ========================

/// Shortest Remaining Time First.
///
/// Key: `remaining_time, arrival_time, pid`. Re-evaluated every tick
/// over all arrived, unfinished processes.
#[derive(Debug, Clone, Copy)]
pub struct Srtf;

impl PolicySelector for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn compare(&self, a: &ProcessRuntimeState, b: &ProcessRuntimeState) -> Ordering {
        a.remaining_time
            .cmp(&b.remaining_time)
            .then_with(|| by_arrival_then_pid(a, b))
    }

    fn preemption(&self) -> Preemption {
        Preemption::EveryTick
    }

    fn explain_dispatch(&self, pid: Pid) -> String {
        format!("SRTF: P{pid} preempted/started (Shortest Remaining).")
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

/// Priority scheduling, preemptive.
///
/// Key: `priority, arrival_time, pid`. Re-evaluated every tick.
#[derive(Debug, Clone, Copy)]
pub struct PriorityPreemptive;

impl PolicySelector for PriorityPreemptive {
    fn name(&self) -> &'static str {
        "Priority (P)"
    }

    fn compare(&self, a: &ProcessRuntimeState, b: &ProcessRuntimeState) -> Ordering {
        a.priority()
            .cmp(&b.priority())
            .then_with(|| by_arrival_then_pid(a, b))
    }

    fn preemption(&self) -> Preemption {
        Preemption::EveryTick
    }

    fn explain_dispatch(&self, pid: Pid) -> String {
        format!("Priority (P): P{pid} preempted/started.")
    }

    fn description(&self) -> &'static str {
        "Priority, preemptive"
    }
}

// ======================== Time-sliced ========================

/// Round Robin.
///
/// Pure FIFO: every pair compares equal so a stable sort leaves the
/// arrival/re-queue order untouched.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin;

impl PolicySelector for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn compare(&self, _a: &ProcessRuntimeState, _b: &ProcessRuntimeState) -> Ordering {
        Ordering::Equal
    }

    fn preemption(&self) -> Preemption {
        Preemption::QuantumExpiry
    }

    fn explain_dispatch(&self, pid: Pid) -> String {
        format!("RR: P{pid} started new slice.")
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessDescriptor;
    use crate::policy::CandidateSet;

    fn state(pid: Pid, arrival: u64, burst: u64, priority: i32) -> ProcessRuntimeState {
        ProcessRuntimeState::new(ProcessDescriptor::new(pid, arrival, burst).with_priority(priority))
    }

    fn sorted(rule: &dyn PolicySelector, mut states: Vec<ProcessRuntimeState>) -> Vec<Pid> {
        states.sort_by(|a, b| rule.compare(a, b));
        states.iter().map(|s| s.pid()).collect()
    }

    #[test]
    fn test_fcfs_arrival_then_pid() {
        let states = vec![state(3, 1, 5, 0), state(2, 0, 5, 0), state(1, 1, 5, 0)];
        assert_eq!(sorted(&Fcfs, states), vec![2, 1, 3]);
    }

    #[test]
    fn test_fcfs_ignores_burst_and_priority() {
        let states = vec![state(1, 0, 9, 5), state(2, 0, 1, 1)];
        assert_eq!(sorted(&Fcfs, states), vec![1, 2]);
    }

    #[test]
    fn test_sjf_burst_first() {
        let states = vec![state(1, 0, 8, 0), state(2, 1, 3, 0), state(3, 2, 3, 0)];
        assert_eq!(sorted(&Sjf, states), vec![2, 3, 1]);
    }

    #[test]
    fn test_sjf_uses_burst_not_remaining() {
        let mut long = state(1, 0, 8, 0);
        long.remaining_time = 1;
        let states = vec![long, state(2, 0, 3, 0)];
        assert_eq!(sorted(&Sjf, states), vec![2, 1]);
    }

    #[test]
    fn test_srtf_uses_remaining() {
        let mut p1 = state(1, 0, 8, 0);
        p1.remaining_time = 2;
        let states = vec![state(2, 1, 4, 0), p1];
        assert_eq!(sorted(&Srtf, states), vec![1, 2]);
    }

    #[test]
    fn test_srtf_tie_on_remaining() {
        let states = vec![state(4, 3, 5, 0), state(2, 1, 5, 0), state(3, 1, 5, 0)];
        assert_eq!(sorted(&Srtf, states), vec![2, 3, 4]);
    }

    #[test]
    fn test_priority_lower_value_first() {
        let states = vec![state(1, 0, 5, 3), state(2, 2, 5, 1), state(3, 1, 5, 1)];
        assert_eq!(sorted(&PriorityNonPreemptive, states.clone()), vec![3, 2, 1]);
        assert_eq!(sorted(&PriorityPreemptive, states), vec![3, 2, 1]);
    }

    #[test]
    fn test_round_robin_keeps_order() {
        let states = vec![state(3, 2, 1, 0), state(1, 0, 5, 0), state(2, 1, 3, 0)];
        assert_eq!(sorted(&RoundRobin, states), vec![3, 1, 2]);
    }

    #[test]
    fn test_preemption_and_candidates() {
        assert_eq!(Fcfs.preemption(), Preemption::Never);
        assert_eq!(Sjf.candidate_set(), CandidateSet::ReadyQueue);
        assert_eq!(Srtf.candidate_set(), CandidateSet::AllArrived);
        assert_eq!(PriorityPreemptive.candidate_set(), CandidateSet::AllArrived);
        assert_eq!(RoundRobin.preemption(), Preemption::QuantumExpiry);
        assert_eq!(RoundRobin.candidate_set(), CandidateSet::ReadyQueue);
    }

    #[test]
    fn test_explanations() {
        assert_eq!(Fcfs.explain_dispatch(1), "FCFS: P1 started.");
        assert_eq!(Sjf.explain_dispatch(2), "SJF: P2 started (Shortest Burst).");
        assert_eq!(RoundRobin.explain_dispatch(3), "RR: P3 started new slice.");
    }
}
