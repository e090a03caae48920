//! Process model.
//!
//! A process is described once by the caller ([`ProcessDescriptor`]) and
//! tracked during a run by a [`ProcessRuntimeState`] that the simulation
//! loop owns and copies into every snapshot.
//!
//! # Time Representation
//! All times are in ticks relative to the start of the simulation (t=0).

use serde::{Deserialize, Serialize};

/// Process identifier. Must be positive and unique within a run.
pub type Pid = u32;

/// Static per-process input.
///
/// Lower `priority` values mean higher priority, following the usual
/// textbook convention for priority scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDescriptor {
    /// Unique positive process identifier.
    pub pid: Pid,
    /// Tick at which the process becomes ready.
    pub arrival_time: u64,
    /// Total CPU ticks required.
    pub burst_time: u64,
    /// Scheduling priority (lower = more important).
    #[serde(default)]
    pub priority: i32,
}

impl ProcessDescriptor {
    /// Creates a descriptor with priority 0.
    pub fn new(pid: Pid, arrival_time: u64, burst_time: u64) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// Mutable per-run view of a process.
///
/// Completion metrics stay `None` while the run is in flight and for any
/// process that never finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRuntimeState {
    /// The descriptor this state was created from.
    #[serde(flatten)]
    pub process: ProcessDescriptor,
    /// CPU ticks still required.
    pub remaining_time: u64,
    /// Tick at which the last unit of work finished.
    pub completion_time: Option<u64>,
    /// `completion_time - arrival_time`.
    pub turnaround_time: Option<u64>,
    /// `turnaround_time - burst_time`.
    pub waiting_time: Option<u64>,
    /// Ticks between arrival and first dispatch.
    pub response_time: Option<u64>,
    /// Whether `remaining_time` has reached zero.
    pub is_completed: bool,
}

impl ProcessRuntimeState {
    /// Creates the initial runtime state for a descriptor.
    pub fn new(process: ProcessDescriptor) -> Self {
        Self {
            process,
            remaining_time: process.burst_time,
            completion_time: None,
            turnaround_time: None,
            waiting_time: None,
            response_time: None,
            is_completed: false,
        }
    }

    #[inline]
    pub fn pid(&self) -> Pid {
        self.process.pid
    }

    #[inline]
    pub fn arrival_time(&self) -> u64 {
        self.process.arrival_time
    }

    #[inline]
    pub fn burst_time(&self) -> u64 {
        self.process.burst_time
    }

    #[inline]
    pub fn priority(&self) -> i32 {
        self.process.priority
    }

    /// Whether the process has arrived by `time` and still needs the CPU.
    #[inline]
    pub fn is_eligible_at(&self, time: u64) -> bool {
        self.process.arrival_time <= time && self.remaining_time > 0
    }

    /// Consumes one tick of CPU. Returns `true` if this finished the process.
    pub(crate) fn execute_unit(&mut self) -> bool {
        self.remaining_time = self.remaining_time.saturating_sub(1);
        if self.remaining_time == 0 {
            self.is_completed = true;
        }
        self.is_completed
    }
}
