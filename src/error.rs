//! Scheduling error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that can occur while building a forest or running a schedule.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A slot or deadline index lies outside `0..size`.
    #[error("index {index} is out of range for {size} slot(s)")]
    OutOfRange { index: usize, size: usize },

    /// The forest resolved a deadline to a slot that is already taken.
    #[error("forest invariant violated: task {task} resolved to already assigned slot {slot}")]
    InvariantViolation { task: usize, slot: usize },

    /// Boundary validation rejected the raw deadline input.
    #[error("invalid deadline input: {}", format_validation_errors(.0))]
    Invalid(Vec<ValidationError>),

    /// TOML configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Invalid(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_out_of_range_message() {
        let err = ScheduleError::OutOfRange { index: 12, size: 10 };
        assert_eq!(err.to_string(), "index 12 is out of range for 10 slot(s)");
    }

    #[test]
    fn test_invalid_joins_messages() {
        let err = ScheduleError::from(vec![
            ValidationError::new(ValidationErrorKind::Negative, "task 1 has negative deadline -1"),
            ValidationError::new(ValidationErrorKind::OutOfRange, "task 2 deadline 9 exceeds 3 slot(s)"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid deadline input: task 1 has negative deadline -1; task 2 deadline 9 exceeds 3 slot(s)"
        );
    }
}
