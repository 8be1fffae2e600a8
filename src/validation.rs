//! Input validation for process lists.
//!
//! Checks structural integrity of a process batch before any policy runs.
//! Detects:
//! - Duplicate process IDs
//! - Negative bursts
//! - Negative arrival times
//! - Batches whose time horizon (latest arrival plus total burst) does not
//!   fit in an `i64`
//!
//! Zero bursts are allowed: such a process completes the moment it is
//! dispatched and contributes no slice to the trace.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Error, Debug, Clone, PartialEq)]
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
    /// Two processes share the same ID.
    DuplicateId,
    /// A process requires a negative amount of CPU time.
    NegativeBurst,
    /// A process arrives before t=0.
    NegativeArrival,
    /// Latest arrival plus total burst exceeds the representable time range.
    TimeOverflow,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process batch.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. Every burst is non-negative
/// 3. Every arrival is non-negative
/// 4. The latest arrival plus the total burst fits in an `i64`, which bounds
///    every clock value a scheduler can reach
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
        if p.burst < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeBurst,
                format!("Process {} has negative burst {}", p.id, p.burst),
            ));
        }
        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} has negative arrival {}", p.id, p.arrival),
            ));
        }
    }

    if time_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst overflows the time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Latest arrival plus total burst, or `None` on overflow.
///
/// Negative fields are reported separately and count as zero here.
fn time_horizon(processes: &[Process]) -> Option<i64> {
    let latest_arrival = processes.iter().map(|p| p.arrival.max(0)).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |horizon, p| horizon.checked_add(p.burst.max(0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let processes = vec![
            Process::new(1, 4, 0),
            Process::new(2, 0, 2),
            Process::new(3, 1, 3).with_priority(-2),
        ];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_processes(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new(1, 4, 0), Process::new(1, 2, 1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert_eq!(errors[0].to_string(), "Duplicate process ID: 1");
    }

    #[test]
    fn test_negative_fields() {
        let processes = vec![Process::new(1, -3, 0), Process::new(2, 2, -1)];
        let errors = validate_processes(&processes).unwrap_err();
        let kinds: Vec<ValidationErrorKind> = errors.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationErrorKind::NegativeBurst,
                ValidationErrorKind::NegativeArrival
            ]
        );
    }

    #[test]
    fn test_collects_all_errors() {
        let processes = vec![Process::new(1, -1, -1), Process::new(1, 1, 0)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_time_overflow() {
        let processes = vec![Process::new(1, i64::MAX, 0), Process::new(2, 1, 0)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);

        let processes = vec![Process::new(1, 1, i64::MAX)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_horizon_at_limit_is_valid() {
        let processes = vec![Process::new(1, i64::MAX - 10, 0), Process::new(2, 4, 6)];
        assert!(validate_processes(&processes).is_ok());
    }
}
