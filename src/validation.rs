//! Input validation for simulation runs.
//!
//! Checks the process table and configuration before any tick is
//! simulated. Detects:
//! - Empty process lists
//! - Zero or duplicate pids
//! - Zero burst times
//! - A zero quantum for round robin
//! - A zero tick ceiling
//!
//! Every problem is reported, not just the first.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::ProcessDescriptor;
use crate::simulation::SimulationConfig;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyProcessList,
    /// A pid is zero.
    InvalidPid,
    /// Two processes share a pid.
    DuplicatePid,
    /// A process has a zero burst time.
    NonPositiveBurst,
    /// Round robin was requested with a zero quantum.
    NonPositiveQuantum,
    /// The tick ceiling is zero.
    ZeroTickCeiling,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process table against a run configuration.
///
/// Checks:
/// 1. At least one process
/// 2. Every pid is positive
/// 3. No duplicate pids
/// 4. Every burst time is positive
/// 5. Round robin has a positive quantum
/// 6. The tick ceiling is positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[ProcessDescriptor], config: &SimulationConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessList,
            "Process list is empty",
        ));
    }

    let mut pids = HashSet::new();
    for p in processes {
        if p.pid == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPid,
                "Process ID must be positive, got 0",
            ));
        } else if !pids.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate process ID: P{}", p.pid),
            ));
        }

        if p.burst_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process P{} has a burst time of 0", p.pid),
            ));
        }
    }

    if config.policy.uses_quantum() && config.quantum == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            "Round robin requires a positive time quantum",
        ));
    }

    if config.tick_ceiling == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroTickCeiling,
            "Tick ceiling must be positive",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Policy;

    fn sample_processes() -> Vec<ProcessDescriptor> {
        vec![
            ProcessDescriptor::new(1, 0, 5),
            ProcessDescriptor::new(2, 1, 3).with_priority(2),
        ]
    }

    fn kinds(errors: &[ValidationError]) -> Vec<ValidationErrorKind> {
        errors.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_valid_input() {
        let config = SimulationConfig::new(Policy::RoundRobin);
        assert!(validate_input(&sample_processes(), &config).is_ok());
    }

    #[test]
    fn test_empty_process_list() {
        let errors = validate_input(&[], &SimulationConfig::new(Policy::Fcfs)).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::EmptyProcessList]);
    }

    #[test]
    fn test_zero_pid() {
        let processes = vec![ProcessDescriptor::new(0, 0, 1)];
        let errors = validate_input(&processes, &SimulationConfig::new(Policy::Fcfs)).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::InvalidPid]);
    }

    #[test]
    fn test_duplicate_pid() {
        let processes = vec![ProcessDescriptor::new(1, 0, 1), ProcessDescriptor::new(1, 2, 3)];
        let errors = validate_input(&processes, &SimulationConfig::new(Policy::Sjf)).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::DuplicatePid]);
        assert!(errors[0].message.contains("P1"));
    }

    #[test]
    fn test_zero_burst() {
        let processes = vec![ProcessDescriptor::new(4, 0, 0)];
        let errors = validate_input(&processes, &SimulationConfig::new(Policy::Srtf)).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::NonPositiveBurst]);
        assert_eq!(errors[0].to_string(), "Process P4 has a burst time of 0");
    }

    #[test]
    fn test_zero_quantum_only_matters_for_round_robin() {
        let rr = SimulationConfig::new(Policy::RoundRobin).with_quantum(0);
        let errors = validate_input(&sample_processes(), &rr).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::NonPositiveQuantum]);

        let fcfs = SimulationConfig::new(Policy::Fcfs).with_quantum(0);
        assert!(validate_input(&sample_processes(), &fcfs).is_ok());
    }

    #[test]
    fn test_zero_tick_ceiling() {
        let config = SimulationConfig::new(Policy::Fcfs).with_tick_ceiling(0);
        let errors = validate_input(&sample_processes(), &config).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::ZeroTickCeiling]);
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![ProcessDescriptor::new(0, 0, 0), ProcessDescriptor::new(2, 0, 0)];
        let config = SimulationConfig::new(Policy::RoundRobin).with_quantum(0);
        let errors = validate_input(&processes, &config).unwrap_err();
        assert!(errors.len() >= 4);
    }
}
