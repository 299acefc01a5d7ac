//! Input validation for deadline sequences.
//!
//! Raw deadlines arrive as signed integers (from a config file, the command
//! line, or another caller) and are checked before any forest is built.
//! Detects:
//! - Empty input
//! - Negative deadlines
//! - Deadlines at or past the slot count
//!
//! The slot count of a run equals the number of tasks, so a sequence of
//! length `n` must only hold values in `0..n`.

use thiserror::Error;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// 0-based task the error refers to, if any.
    pub task: Option<usize>,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No tasks were supplied.
    Empty,
    /// A deadline is below zero.
    Negative,
    /// A deadline is not a slot of the run.
    OutOfRange,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            task: None,
            message: message.into(),
        }
    }

    fn for_task(kind: ValidationErrorKind, task: usize, message: impl Into<String>) -> Self {
        Self {
            task: Some(task),
            ..Self::new(kind, message)
        }
    }
}

/// Validates a raw deadline sequence.
///
/// Checks:
/// 1. At least one task
/// 2. No negative deadline
/// 3. Every deadline is below the number of tasks
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_deadlines(deadlines: &[i64]) -> ValidationResult {
    let mut errors = Vec::new();
    let size = deadlines.len();

    if size == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::Empty,
            "no tasks to schedule",
        ));
    }

    for (task, &deadline) in deadlines.iter().enumerate() {
        if deadline < 0 {
            errors.push(ValidationError::for_task(
                ValidationErrorKind::Negative,
                task,
                format!("task {} has negative deadline {deadline}", task + 1),
            ));
        } else if deadline as u64 >= size as u64 {
            errors.push(ValidationError::for_task(
                ValidationErrorKind::OutOfRange,
                task,
                format!(
                    "task {} deadline {deadline} exceeds {size} slot(s)",
                    task + 1
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates and converts raw deadlines into slot indices.
pub fn to_slots(deadlines: &[i64]) -> Result<Vec<usize>, Vec<ValidationError>> {
    validate_deadlines(deadlines)?;
    Ok(deadlines.iter().map(|&d| d as usize).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        assert!(validate_deadlines(&[0, 6, 1, 9, 2, 5, 3, 3, 6, 0]).is_ok());
        assert!(validate_deadlines(&[0]).is_ok());
    }

    #[test]
    fn test_empty_input() {
        let errors = validate_deadlines(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::Empty);
        assert_eq!(errors[0].task, None);
    }

    #[test]
    fn test_negative_deadline() {
        let errors = validate_deadlines(&[0, -1]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::Negative);
        assert_eq!(errors[0].task, Some(1));
        assert_eq!(errors[0].to_string(), "task 2 has negative deadline -1");
    }

    #[test]
    fn test_deadline_past_last_slot() {
        let errors = validate_deadlines(&[0, 2]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::OutOfRange);
        assert!(errors[0].message.contains("exceeds 2 slot(s)"));
    }

    #[test]
    fn test_collects_all_errors() {
        let errors = validate_deadlines(&[-3, 5, 0, -1]).unwrap_err();
        let kinds: Vec<_> = errors.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationErrorKind::Negative,
                ValidationErrorKind::OutOfRange,
                ValidationErrorKind::Negative,
            ]
        );
    }

    #[test]
    fn test_to_slots() {
        assert_eq!(to_slots(&[2, 0, 1]).unwrap(), vec![2, 0, 1]);
        assert!(to_slots(&[3, 0, 1]).is_err());
    }
}
