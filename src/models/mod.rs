//! Simulation domain models.
//!
//! Provides the value types exchanged between the simulation loop,
//! the trace recorder and trace consumers.
//!
//! # Lifecycle
//!
//! | Type | Created | Mutated |
//! |------|---------|---------|
//! | `ProcessDescriptor` | by the caller, before a run | never |
//! | `ProcessRuntimeState` | at run start, one per descriptor | by the loop only |
//! | `Snapshot` | once per tick, plus a terminal one | never |
//! | `GanttChart` | during the run, one entry per tick | append-only |

mod gantt;
mod process;
mod snapshot;

pub use gantt::{GanttChart, GanttSlice};
pub use process::{Pid, ProcessDescriptor, ProcessRuntimeState};
pub use snapshot::{Snapshot, SnapshotKind};
