//! Uniprocessor CPU scheduling simulator.
//!
//! Reproduces six classical scheduling policies tick by tick and records
//! a deterministic, replayable trace with per-process metrics. Intended as
//! the computational core behind scheduling visualizations and teaching
//! material.
//!
//! # Modules
//!
//! - **`models`**: Value types: `ProcessDescriptor`, `ProcessRuntimeState`,
//!   `Snapshot`, `GanttChart`
//! - **`policy`**: `Policy` identifiers and their `PolicySelector` rules
//!   (FCFS, SJF, SRTF, Priority NP/P, RR)
//! - **`simulation`**: `Simulator`, `SimulationConfig`, `SimulationOutcome`,
//!   `MetricsCalculator`, `SchedulingKpi`
//! - **`trace`**: `Trace`, `TraceRecorder`, `TracePlayer`
//! - **`validation`**: Input integrity checks (empty tables, pids, bursts, quantum)
//! - **`workload`**: Random process tables
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::ProcessDescriptor;
//! use u_cpusched::policy::Policy;
//! use u_cpusched::simulation::simulate;
//!
//! let processes = vec![
//!     ProcessDescriptor::new(1, 0, 8),
//!     ProcessDescriptor::new(2, 1, 4),
//!     ProcessDescriptor::new(3, 2, 9),
//!     ProcessDescriptor::new(4, 3, 5),
//! ];
//! let trace = simulate(Policy::Srtf, &processes).unwrap().into_result().unwrap();
//!
//! let completion: Vec<_> = trace.metrics.iter().map(|m| m.completion_time).collect();
//! assert_eq!(completion, vec![Some(17), Some(5), Some(26), Some(10)]);
//! ```
//!
//! # Scope
//!
//! Single core, CPU-bound processes, zero-cost context switches. The crate
//! performs no I/O and installs no `tracing` subscriber.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod models;
pub mod policy;
pub mod simulation;
pub mod trace;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
