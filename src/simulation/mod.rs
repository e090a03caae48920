//! Tick-by-tick simulation and metrics.
//!
//! # Algorithm
//!
//! `Simulator` advances a virtual clock in unit steps. Each tick it admits
//! arrivals, asks the policy's selector for the process to run, records a
//! snapshot, executes one unit, and applies completion and quantum checks.
//! Metrics are derived afterwards from the Gantt sequence alone.
//!
//! # Metrics
//!
//! `MetricsCalculator` computes per-process completion, turnaround, waiting
//! and response times; `SchedulingKpi` aggregates them for the whole run.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

mod config;
mod engine;
mod kpi;
mod metrics;
mod outcome;

pub use config::{SimulationConfig, DEFAULT_QUANTUM, DEFAULT_TICK_CEILING};
pub use engine::{simulate, Simulator};
pub use kpi::SchedulingKpi;
pub use metrics::MetricsCalculator;
pub use outcome::{BoundExceeded, SimulationOutcome};
