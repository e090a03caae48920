//! Aggregate scheduling metrics (KPIs).
//!
//! Summarizes a finished run for side-by-side policy comparison.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Gantt length (busy + idle ticks) |
//! | Avg Turnaround | mean(completion - arrival) over finished processes |
//! | Avg Waiting | mean(turnaround - burst) over finished processes |
//! | Avg Response | mean(first dispatch - arrival) over finished processes |
//! | Utilization | busy ticks / makespan |
//! | Throughput | finished processes / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{GanttChart, ProcessRuntimeState};

/// Run-level performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingKpi {
    /// Total ticks simulated.
    pub makespan: u64,
    /// Ticks where some process ran.
    pub busy_ticks: u64,
    /// Processes that received their full burst.
    pub finished: usize,
    /// Mean turnaround time over finished processes.
    pub avg_turnaround_time: f64,
    /// Mean waiting time over finished processes.
    pub avg_waiting_time: f64,
    /// Mean response time over finished processes.
    pub avg_response_time: f64,
    /// Fraction of ticks the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Finished processes per tick.
    pub throughput: f64,
}

impl SchedulingKpi {
    /// Computes KPIs from a Gantt sequence and finalized process states.
    pub fn calculate(gantt: &GanttChart, metrics: &[ProcessRuntimeState]) -> Self {
        let makespan = gantt.len() as u64;
        let busy_ticks = gantt.busy_ticks();

        let finished: Vec<&ProcessRuntimeState> =
            metrics.iter().filter(|m| m.completion_time.is_some()).collect();

        let mean = |values: Vec<u64>| -> f64 {
            if values.is_empty() {
                0.0
            } else {
                values.iter().sum::<u64>() as f64 / values.len() as f64
            }
        };

        let avg_turnaround_time = mean(finished.iter().filter_map(|m| m.turnaround_time).collect());
        let avg_waiting_time = mean(finished.iter().filter_map(|m| m.waiting_time).collect());
        let avg_response_time = mean(finished.iter().filter_map(|m| m.response_time).collect());

        let (cpu_utilization, throughput) = if makespan == 0 {
            (0.0, 0.0)
        } else {
            (
                busy_ticks as f64 / makespan as f64,
                finished.len() as f64 / makespan as f64,
            )
        };

        Self {
            makespan,
            busy_ticks,
            finished: finished.len(),
            avg_turnaround_time,
            avg_waiting_time,
            avg_response_time,
            cpu_utilization,
            throughput,
        }
    }
}
