//! Gantt sequence model.
//!
//! The Gantt sequence is the per-tick record of which process held the CPU.
//! [`GanttChart`] stores it verbatim and derives merged execution slices
//! for timeline rendering and quantum checks.

use serde::{Deserialize, Serialize};

use super::Pid;

/// A contiguous run of one process on the CPU, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttSlice {
    /// Process that ran.
    pub pid: Pid,
    /// First tick of the slice.
    pub start: u64,
    /// Tick after the last unit of the slice.
    pub end: u64,
}

impl GanttSlice {
    /// Slice length in ticks.
    #[inline]
    pub fn duration(&self) -> u64 {
        self.end - self.start
    }
}

/// Per-tick CPU occupancy. `None` marks an idle tick.
///
/// Ticks on which a process was (re)dispatched are tracked separately, so
/// scheduler slices stay visible even when the same process is picked again
/// on the next tick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttChart {
    ticks: Vec<Option<Pid>>,
    /// Ascending tick indices that started a new dispatch.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    dispatches: Vec<u64>,
}

impl GanttChart {
    /// Creates an empty chart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the occupant of the next tick.
    pub fn push(&mut self, pid: Option<Pid>) {
        self.ticks.push(pid);
    }

    /// Marks the most recently pushed tick as the start of a dispatch.
    pub fn mark_dispatch(&mut self) {
        let Some(last) = self.ticks.len().checked_sub(1) else {
            return;
        };
        let last = last as u64;
        if self.dispatches.last() != Some(&last) {
            self.dispatches.push(last);
        }
    }

    /// Tick indices where a process was dispatched.
    pub fn dispatch_ticks(&self) -> &[u64] {
        &self.dispatches
    }

    /// Raw per-tick sequence.
    pub fn ticks(&self) -> &[Option<Pid>] {
        &self.ticks
    }

    /// Number of recorded ticks (busy and idle).
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// Number of ticks where some process ran.
    pub fn busy_ticks(&self) -> u64 {
        self.ticks.iter().filter(|t| t.is_some()).count() as u64
    }

    /// Number of idle ticks.
    pub fn idle_ticks(&self) -> u64 {
        self.ticks.len() as u64 - self.busy_ticks()
    }

    /// Ticks on which `pid` ran.
    pub fn ticks_for(&self, pid: Pid) -> u64 {
        self.ticks.iter().filter(|t| **t == Some(pid)).count() as u64
    }

    /// Index of the first tick `pid` ran.
    pub fn first_occurrence(&self, pid: Pid) -> Option<usize> {
        self.ticks.iter().position(|t| *t == Some(pid))
    }

    /// Index of the last tick `pid` ran.
    pub fn last_occurrence(&self, pid: Pid) -> Option<usize> {
        self.ticks.iter().rposition(|t| *t == Some(pid))
    }

    /// Merges consecutive ticks of the same process into slices.
    ///
    /// Idle ticks are skipped. A process that is preempted and immediately
    /// re-dispatched (e.g. round robin with an otherwise empty queue)
    /// appears as one merged slice.
    pub fn slices(&self) -> Vec<GanttSlice> {
        let mut slices: Vec<GanttSlice> = Vec::new();
        for (i, tick) in self.ticks.iter().enumerate() {
            let Some(pid) = *tick else { continue };
            let t = i as u64;
            match slices.last_mut() {
                Some(last) if last.pid == pid && last.end == t => last.end = t + 1,
                _ => slices.push(GanttSlice {
                    pid,
                    start: t,
                    end: t + 1,
                }),
            }
        }
        slices
    }

    /// Splits execution at every dispatch as well as at pid changes.
    ///
    /// Unlike [`slices`](Self::slices), a round-robin process that is
    /// preempted and immediately re-dispatched yields one slice per
    /// quantum. Without recorded dispatches this equals `slices()`.
    pub fn dispatch_slices(&self) -> Vec<GanttSlice> {
        let mut slices: Vec<GanttSlice> = Vec::new();
        let mut dispatches = self.dispatches.iter().peekable();
        for (i, tick) in self.ticks.iter().enumerate() {
            let t = i as u64;
            let mut dispatched = false;
            while let Some(&&d) = dispatches.peek() {
                if d > t {
                    break;
                }
                dispatched |= d == t;
                dispatches.next();
            }
            let Some(pid) = *tick else { continue };
            match slices.last_mut() {
                Some(last) if !dispatched && last.pid == pid && last.end == t => last.end = t + 1,
                _ => slices.push(GanttSlice {
                    pid,
                    start: t,
                    end: t + 1,
                }),
            }
        }
        slices
    }

    /// Order in which processes were dispatched, one entry per slice.
    pub fn run_order(&self) -> Vec<Pid> {
        self.slices().iter().map(|s| s.pid).collect()
    }
}

impl From<Vec<Option<Pid>>> for GanttChart {
    fn from(ticks: Vec<Option<Pid>>) -> Self {
        Self {
            ticks,
            dispatches: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> GanttChart {
        GanttChart::from(vec![None, Some(1), Some(1), Some(2), None, Some(1)])
    }

    #[test]
    fn test_counts() {
        let g = chart();
        assert_eq!(g.len(), 6);
        assert_eq!(g.busy_ticks(), 4);
        assert_eq!(g.idle_ticks(), 2);
        assert_eq!(g.ticks_for(1), 3);
        assert_eq!(g.ticks_for(9), 0);
    }

    #[test]
    fn test_occurrences() {
        let g = chart();
        assert_eq!(g.first_occurrence(1), Some(1));
        assert_eq!(g.last_occurrence(1), Some(5));
        assert_eq!(g.last_occurrence(3), None);
    }

    #[test]
    fn test_slices_skip_idle() {
        let slices = chart().slices();
        assert_eq!(
            slices,
            vec![
                GanttSlice { pid: 1, start: 1, end: 3 },
                GanttSlice { pid: 2, start: 3, end: 4 },
                GanttSlice { pid: 1, start: 5, end: 6 },
            ]
        );
        assert_eq!(slices[0].duration(), 2);
    }

    #[test]
    fn test_idle_gap_splits_same_pid() {
        let g = GanttChart::from(vec![Some(1), None, Some(1)]);
        assert_eq!(g.run_order(), vec![1, 1]);
    }

    #[test]
    fn test_dispatch_slices_split_redispatch() {
        let mut g = GanttChart::new();
        for (pid, dispatched) in [(1, true), (1, false), (1, true), (1, false), (2, true)] {
            g.push(Some(pid));
            if dispatched {
                g.mark_dispatch();
            }
        }
        assert_eq!(g.dispatch_ticks(), &[0, 2, 4]);
        assert_eq!(g.slices().len(), 2);
        assert_eq!(
            g.dispatch_slices(),
            vec![
                GanttSlice { pid: 1, start: 0, end: 2 },
                GanttSlice { pid: 1, start: 2, end: 4 },
                GanttSlice { pid: 2, start: 4, end: 5 },
            ]
        );
    }

    #[test]
    fn test_dispatch_slices_without_marks() {
        let g = chart();
        assert_eq!(g.dispatch_slices(), g.slices());
    }

    #[test]
    fn test_mark_dispatch_on_empty_chart() {
        let mut g = GanttChart::new();
        g.mark_dispatch();
        assert!(g.dispatch_ticks().is_empty());
    }

    #[test]
    fn test_empty() {
        let g = GanttChart::new();
        assert!(g.is_empty());
        assert!(g.slices().is_empty());
    }
}
