//! Trace snapshot model.
//!
//! A snapshot is the recorded system state at the start of one tick
//! (before that tick's unit of work executes), or the terminal state
//! after the run ends. Snapshots own all of their data; nothing is
//! shared with the live simulation.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::{Pid, ProcessRuntimeState};

/// Distinguishes in-flight snapshots from the final one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotKind {
    /// State at the start of a simulated tick.
    Tick,
    /// Final state with finalized metrics.
    Terminal,
}

/// Immutable recorded state of the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Clock value this snapshot describes.
    pub time: u64,
    /// Process holding the CPU during this tick.
    pub running_pid: Option<Pid>,
    /// Ready queue contents, head first.
    pub ready_queue_ids: Vec<Pid>,
    /// Processes that have finished.
    pub completed_ids: BTreeSet<Pid>,
    /// Remaining CPU ticks per process.
    pub remaining_times: BTreeMap<Pid, u64>,
    /// Per-process runtime state.
    pub metrics: Vec<ProcessRuntimeState>,
    /// Processes whose arrival time equals `time`.
    pub arriving_ids: Vec<Pid>,
    /// Human-readable description of the scheduling decision.
    pub explanation: String,
    /// Tick or terminal.
    pub kind: SnapshotKind,
}

impl Snapshot {
    /// Builds a snapshot by copying the given process states.
    pub fn capture(
        kind: SnapshotKind,
        time: u64,
        running_pid: Option<Pid>,
        ready_queue_ids: Vec<Pid>,
        states: &[ProcessRuntimeState],
        explanation: impl Into<String>,
    ) -> Self {
        let completed_ids = states
            .iter()
            .filter(|s| s.remaining_time == 0)
            .map(ProcessRuntimeState::pid)
            .collect();
        let remaining_times = states
            .iter()
            .map(|s| (s.pid(), s.remaining_time))
            .collect();
        // The terminal snapshot closes the run; nothing arrives into it.
        let arriving_ids = match kind {
            SnapshotKind::Tick => states
                .iter()
                .filter(|s| s.arrival_time() == time)
                .map(ProcessRuntimeState::pid)
                .collect(),
            SnapshotKind::Terminal => Vec::new(),
        };

        Self {
            time,
            running_pid,
            ready_queue_ids,
            completed_ids,
            remaining_times,
            metrics: states.to_vec(),
            arriving_ids,
            explanation: explanation.into(),
            kind,
        }
    }

    /// Whether this is the terminal snapshot.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.kind == SnapshotKind::Terminal
    }

    /// Whether the CPU is idle in this snapshot.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.running_pid.is_none()
    }

    /// Remaining time for a process, if it is part of the run.
    pub fn remaining_time(&self, pid: Pid) -> Option<u64> {
        self.remaining_times.get(&pid).copied()
    }

    /// Runtime state for a process.
    pub fn state_of(&self, pid: Pid) -> Option<&ProcessRuntimeState> {
        self.metrics.iter().find(|s| s.pid() == pid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessDescriptor;

    fn states() -> Vec<ProcessRuntimeState> {
        let mut done = ProcessRuntimeState::new(ProcessDescriptor::new(1, 0, 2));
        done.remaining_time = 0;
        done.is_completed = true;
        vec![
            done,
            ProcessRuntimeState::new(ProcessDescriptor::new(2, 3, 4)),
            ProcessRuntimeState::new(ProcessDescriptor::new(3, 3, 1)),
        ]
    }

    #[test]
    fn test_capture_derives_views() {
        let snap = Snapshot::capture(SnapshotKind::Tick, 3, Some(2), vec![3], &states(), "x");
        assert_eq!(snap.running_pid, Some(2));
        assert_eq!(snap.ready_queue_ids, vec![3]);
        assert_eq!(snap.completed_ids.iter().copied().collect::<Vec<_>>(), vec![1]);
        assert_eq!(snap.remaining_time(2), Some(4));
        assert_eq!(snap.arriving_ids, vec![2, 3]);
        assert!(!snap.is_terminal());
        assert!(!snap.is_idle());
    }

    #[test]
    fn test_capture_is_a_copy() {
        let mut live = states();
        let snap = Snapshot::capture(SnapshotKind::Tick, 0, None, vec![], &live, "");
        live[1].remaining_time = 0;
        assert_eq!(snap.remaining_time(2), Some(4));
        assert_eq!(snap.state_of(2).map(|s| s.remaining_time), Some(4));
    }

    #[test]
    fn test_serialized_field_names() {
        let snap = Snapshot::capture(SnapshotKind::Terminal, 5, None, vec![], &states(), "done");
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"runningPid\":null"));
        assert!(json.contains("\"readyQueueIds\":[]"));
        assert!(json.contains("\"kind\":\"terminal\""));
    }

    #[test]
    fn test_terminal_has_no_arrivals() {
        let snap = Snapshot::capture(SnapshotKind::Terminal, 3, None, vec![], &states(), "done");
        assert!(snap.arriving_ids.is_empty());
        assert_eq!(snap.remaining_time(2), Some(4));
    }
}
