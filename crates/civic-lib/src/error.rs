//! Error types for `civic-lib`.

use std::fmt;

use thiserror::Error;

/// Everything a store, view or slot operation can fail with.
#[derive(Error, Debug)]
pub enum CivicError {
    /// No issue carries this ID.
    #[error("Issue not found: {id}")]
    NotFound { id: i64 },

    /// One input field was rejected.
    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Several input fields were rejected, in field order.
    #[error("Invalid input: {}", join_errors(errors))]
    ValidationErrors { errors: Vec<ValidationError> },

    /// An image larger than the accepted limit.
    #[error("Image is {size} bytes; the limit is {limit} bytes")]
    PayloadTooLarge { size: usize, limit: usize },

    /// An administrator operation attempted by someone else.
    #[error("Administrator role required (current role: {role})")]
    Forbidden { role: String },

    /// A bad `config.yaml` or override.
    #[error("Bad configuration: {0}")]
    Config(String),

    /// The durable slot refused a read or write.
    #[error("Slot storage failed: {0}")]
    Storage(String),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A rejected field and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl CivicError {
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Wrap validator output; a lone error becomes `Validation`.
    #[must_use]
    pub fn from_validation_errors(mut errors: Vec<ValidationError>) -> Self {
        match errors.len() {
            1 => {
                let ValidationError { field, message } = errors.swap_remove(0);
                Self::Validation {
                    field,
                    reason: message,
                }
            }
            _ => Self::ValidationErrors { errors },
        }
    }

    /// True for `Validation` and `ValidationErrors`.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::ValidationErrors { .. })
    }

    /// Fields named by a validation error, empty for other kinds.
    #[must_use]
    pub fn invalid_fields(&self) -> Vec<&str> {
        match self {
            Self::Validation { field, .. } => vec![field.as_str()],
            Self::ValidationErrors { errors } => errors.iter().map(|e| e.field.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

/// Result type using `CivicError`.
pub type Result<T> = std::result::Result<T, CivicError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_validation_error_collapses() {
        let err = CivicError::from_validation_errors(vec![ValidationError::new(
            "title",
            "cannot be empty",
        )]);
        assert!(matches!(err, CivicError::Validation { ref field, .. } if field == "title"));
        assert_eq!(err.to_string(), "Invalid title: cannot be empty");
    }

    #[test]
    fn multiple_validation_errors_are_listed() {
        let err = CivicError::from_validation_errors(vec![
            ValidationError::new("title", "cannot be empty"),
            ValidationError::new("location", "is required"),
        ]);
        assert!(err.is_validation());
        assert_eq!(err.invalid_fields(), vec!["title", "location"]);
        assert_eq!(
            err.to_string(),
            "Invalid input: title cannot be empty; location is required"
        );
    }

    #[test]
    fn other_kinds_name_no_fields() {
        let err = CivicError::NotFound { id: 7 };
        assert!(!err.is_validation());
        assert!(err.invalid_fields().is_empty());
    }
}
