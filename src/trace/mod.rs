//! Simulation traces.
//!
//! A [`Trace`] is the externally consumed artifact of a run: one snapshot
//! per tick plus a terminal snapshot, the Gantt sequence, and the final
//! metrics. It is fully materialized and immutable, so consumers may
//! replay it at any speed, step backwards, or index it randomly.

mod player;
mod recorder;

pub use player::TracePlayer;
pub use recorder::TraceRecorder;

use serde::{Deserialize, Serialize};

use crate::models::{GanttChart, Pid, ProcessRuntimeState, Snapshot};
use crate::simulation::SchedulingKpi;

/// Complete, immutable record of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    snapshots: Vec<Snapshot>,
    gantt: GanttChart,
    /// Finalized per-process metrics, in input order.
    pub metrics: Vec<ProcessRuntimeState>,
    /// Run-level indicators.
    pub kpi: SchedulingKpi,
}

impl Trace {
    /// All snapshots, terminal last.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Snapshot at `index`.
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Number of snapshots, terminal included.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// The final snapshot.
    pub fn terminal(&self) -> Option<&Snapshot> {
        self.snapshots.last().filter(|s| s.is_terminal())
    }

    /// Tick snapshots only (terminal excluded).
    pub fn ticks(&self) -> &[Snapshot] {
        match self.snapshots.split_last() {
            Some((last, rest)) if last.is_terminal() => rest,
            _ => &self.snapshots,
        }
    }

    /// Tick snapshot recorded at `time`.
    pub fn snapshot_at_time(&self, time: u64) -> Option<&Snapshot> {
        self.ticks().get(usize::try_from(time).ok()?)
    }

    /// Per-tick CPU occupancy.
    pub fn gantt(&self) -> &GanttChart {
        &self.gantt
    }

    /// Finalized metrics for one process.
    pub fn metrics_for(&self, pid: Pid) -> Option<&ProcessRuntimeState> {
        self.metrics.iter().find(|m| m.pid() == pid)
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}
