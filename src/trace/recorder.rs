//! Append-only trace recording.

use tracing::trace;

use super::Trace;
use crate::models::{GanttChart, Pid, ProcessDescriptor, ProcessRuntimeState, Snapshot, SnapshotKind};
use crate::simulation::{MetricsCalculator, SchedulingKpi};

/// Builds a [`Trace`] one tick at a time.
///
/// Every recorded snapshot is a deep copy of the states passed in, so
/// later mutation of the live simulation never reaches it. Nothing can
/// be removed or rewritten once recorded.
#[derive(Debug, Clone, Default)]
pub struct TraceRecorder {
    snapshots: Vec<Snapshot>,
    gantt: GanttChart,
}

impl TraceRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the state at the start of a tick and its Gantt entry.
    pub fn record_tick(
        &mut self,
        time: u64,
        running_pid: Option<Pid>,
        ready_queue_ids: Vec<Pid>,
        states: &[ProcessRuntimeState],
        explanation: impl Into<String>,
    ) {
        let snapshot = Snapshot::capture(
            SnapshotKind::Tick,
            time,
            running_pid,
            ready_queue_ids,
            states,
            explanation,
        );
        trace!(
            time,
            running = ?snapshot.running_pid,
            ready = ?snapshot.ready_queue_ids,
            "tick recorded"
        );
        self.snapshots.push(snapshot);
        self.gantt.push(running_pid);
    }

    /// Marks the last recorded tick as a fresh dispatch.
    pub fn mark_dispatch(&mut self) {
        self.gantt.mark_dispatch();
    }

    /// Gantt sequence recorded so far.
    pub fn gantt(&self) -> &GanttChart {
        &self.gantt
    }

    /// Number of tick snapshots recorded so far.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Computes final metrics and appends the terminal snapshot.
    pub fn finish(
        self,
        time: u64,
        processes: &[ProcessDescriptor],
        explanation: impl Into<String>,
    ) -> Trace {
        let Self {
            mut snapshots,
            gantt,
        } = self;

        let metrics = MetricsCalculator::calculate(&gantt, processes);
        let kpi = SchedulingKpi::calculate(&gantt, &metrics);
        snapshots.push(Snapshot::capture(
            SnapshotKind::Terminal,
            time,
            None,
            Vec::new(),
            &metrics,
            explanation,
        ));

        Trace {
            snapshots,
            gantt,
            metrics,
            kpi,
        }
    }
}
