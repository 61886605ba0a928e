//! Input validation for simulation runs.
//!
//! Checks structural integrity of the process set and policy parameters
//! before any simulation work. Detects:
//! - Empty process sets
//! - Non-positive burst times
//! - Negative arrival times
//! - Duplicate pids
//! - Non-positive Round-Robin quanta
//!
//! All problems are collected and reported at once; no partial run occurs.

use std::collections::HashSet;

use crate::models::Process;
use crate::policy::Policy;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The process set is empty.
    EmptyProcessSet,
    /// A burst time is below 1.
    NonPositiveBurst,
    /// An arrival time is negative.
    NegativeArrival,
    /// Two processes share a pid.
    DuplicatePid,
    /// A Round-Robin quantum is below 1.
    NonPositiveQuantum,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set and policy before simulation.
///
/// Checks:
/// 1. The process set is non-empty
/// 2. Every burst time is >= 1
/// 3. Every arrival time is >= 0
/// 4. No two processes share a pid
/// 5. A Round-Robin quantum is >= 1
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[Process], policy: &Policy) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "No processes to schedule",
        ));
    }

    let mut pids = HashSet::new();
    for p in processes {
        if !pids.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate pid: {}", p.pid),
            ));
        }
        if p.burst_time < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst time {}", p.pid, p.burst_time),
            ));
        }
        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} has negative arrival time {}", p.pid, p.arrival_time),
            ));
        }
    }

    if let Policy::RoundRobin { quantum } = policy {
        if *quantum < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveQuantum,
                format!("Round-Robin quantum must be >= 1, got {quantum}"),
            ));
        }
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

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(1, 5),
            Process::new(2, 3).with_arrival_time(1),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_processes(), &Policy::Fcfs).is_ok());
        assert!(validate_input(&sample_processes(), &Policy::RoundRobin { quantum: 2 }).is_ok());
    }

    #[test]
    fn test_empty_process_set() {
        let errors = validate_input(&[], &Policy::Fcfs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyProcessSet));
    }

    #[test]
    fn test_duplicate_pid() {
        let processes = vec![Process::new(1, 5), Process::new(1, 3)];
        let errors = validate_input(&processes, &Policy::Fcfs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicatePid));
    }

    #[test]
    fn test_non_positive_burst() {
        let processes = vec![Process::new(1, 0)];
        let errors = validate_input(&processes, &Policy::Fcfs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![Process::new(1, 2).with_arrival_time(-1)];
        let errors = validate_input(&processes, &Policy::Sjf).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_non_positive_quantum() {
        let errors =
            validate_input(&sample_processes(), &Policy::RoundRobin { quantum: 0 }).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveQuantum));
    }

    #[test]
    fn test_quantum_ignored_for_non_preemptive() {
        // A Priority run carries no quantum to validate.
        assert!(validate_input(&sample_processes(), &Policy::Priority).is_ok());
    }

    #[test]
    fn test_multiple_errors_collected() {
        let processes = vec![
            Process::new(1, 0),
            Process::new(1, 3).with_arrival_time(-2),
        ];
        let errors =
            validate_input(&processes, &Policy::RoundRobin { quantum: -1 }).unwrap_err();
        assert!(errors.len() >= 4);
    }
}
