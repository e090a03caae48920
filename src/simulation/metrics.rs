//! Per-process completion metrics.
//!
//! Derived after the loop exits from the Gantt sequence and the input
//! descriptors only, so the figures do not depend on any preemption
//! bookkeeping inside the loop.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion | 1 + index of the last tick the process ran |
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | index of the first tick the process ran - arrival |
//!
//! A process that did not receive its full burst has no metrics (`None`).

use crate::models::{GanttChart, ProcessDescriptor, ProcessRuntimeState};

/// Computes finalized runtime states from a Gantt sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsCalculator;

impl MetricsCalculator {
    /// Returns one finalized state per descriptor, in input order.
    ///
    /// `remaining_time` is recomputed as `burst - ticks run`.
    pub fn calculate(gantt: &GanttChart, processes: &[ProcessDescriptor]) -> Vec<ProcessRuntimeState> {
        processes
            .iter()
            .map(|p| Self::calculate_one(gantt, p))
            .collect()
    }

    fn calculate_one(gantt: &GanttChart, process: &ProcessDescriptor) -> ProcessRuntimeState {
        let mut state = ProcessRuntimeState::new(*process);
        let ran = gantt.ticks_for(process.pid);
        state.remaining_time = process.burst_time.saturating_sub(ran);

        if state.remaining_time > 0 {
            return state;
        }
        state.is_completed = true;

        let Some(last) = gantt.last_occurrence(process.pid) else {
            return state;
        };
        let completion = last as u64 + 1;
        let turnaround = completion.checked_sub(process.arrival_time);

        state.completion_time = Some(completion);
        state.turnaround_time = turnaround;
        state.waiting_time = turnaround.and_then(|t| t.checked_sub(process.burst_time));
        state.response_time = gantt
            .first_occurrence(process.pid)
            .and_then(|first| (first as u64).checked_sub(process.arrival_time));
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_process() {
        let processes = vec![ProcessDescriptor::new(1, 0, 3)];
        let gantt = GanttChart::from(vec![Some(1), Some(1), Some(1)]);
        let m = MetricsCalculator::calculate(&gantt, &processes);
        assert_eq!(m[0].completion_time, Some(3));
        assert_eq!(m[0].turnaround_time, Some(3));
        assert_eq!(m[0].waiting_time, Some(0));
        assert_eq!(m[0].response_time, Some(0));
        assert!(m[0].is_completed);
    }

    #[test]
    fn test_srtf_gantt() {
        // P1 0-1, P2 1-5, P4 5-10, P1 10-17, P3 17-26
        let mut ticks = vec![Some(1)];
        ticks.extend(std::iter::repeat(Some(2)).take(4));
        ticks.extend(std::iter::repeat(Some(4)).take(5));
        ticks.extend(std::iter::repeat(Some(1)).take(7));
        ticks.extend(std::iter::repeat(Some(3)).take(9));
        let gantt = GanttChart::from(ticks);
        let processes = vec![
            ProcessDescriptor::new(1, 0, 8),
            ProcessDescriptor::new(2, 1, 4),
            ProcessDescriptor::new(3, 2, 9),
            ProcessDescriptor::new(4, 3, 5),
        ];

        let m = MetricsCalculator::calculate(&gantt, &processes);
        let completion: Vec<_> = m.iter().map(|s| s.completion_time.unwrap()).collect();
        let turnaround: Vec<_> = m.iter().map(|s| s.turnaround_time.unwrap()).collect();
        let waiting: Vec<_> = m.iter().map(|s| s.waiting_time.unwrap()).collect();
        let response: Vec<_> = m.iter().map(|s| s.response_time.unwrap()).collect();
        assert_eq!(completion, vec![17, 5, 26, 10]);
        assert_eq!(turnaround, vec![17, 4, 24, 7]);
        assert_eq!(waiting, vec![9, 0, 15, 2]);
        assert_eq!(response, vec![0, 0, 15, 2]);
    }

    #[test]
    fn test_idle_prefix() {
        let processes = vec![ProcessDescriptor::new(1, 2, 1)];
        let gantt = GanttChart::from(vec![None, None, Some(1)]);
        let m = MetricsCalculator::calculate(&gantt, &processes);
        assert_eq!(m[0].completion_time, Some(3));
        assert_eq!(m[0].turnaround_time, Some(1));
        assert_eq!(m[0].waiting_time, Some(0));
    }

    #[test]
    fn test_unfinished_process_has_no_metrics() {
        let processes = vec![ProcessDescriptor::new(1, 0, 2), ProcessDescriptor::new(2, 0, 5)];
        let gantt = GanttChart::from(vec![Some(1), Some(1), Some(2)]);
        let m = MetricsCalculator::calculate(&gantt, &processes);
        assert!(m[0].is_completed);
        assert!(!m[1].is_completed);
        assert_eq!(m[1].remaining_time, 4);
        assert_eq!(m[1].completion_time, None);
        assert_eq!(m[1].turnaround_time, None);
        assert_eq!(m[1].waiting_time, None);
        assert_eq!(m[1].response_time, None);
    }

    #[test]
    fn test_never_ran() {
        let processes = vec![ProcessDescriptor::new(7, 0, 1)];
        let m = MetricsCalculator::calculate(&GanttChart::new(), &processes);
        assert_eq!(m[0].completion_time, None);
        assert_eq!(m[0].remaining_time, 1);
    }
}
