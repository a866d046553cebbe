//! Validation for issue submissions.
//!
//! These routines check caller input and return structured validation
//! errors without touching the store.

use crate::error::ValidationError;
use crate::model::IssueInput;

const MAX_TITLE_CHARS: usize = 500;
const MAX_DESCRIPTION_BYTES: usize = 102_400;

/// Validates new-issue input.
pub struct IssueInputValidator;

impl IssueInputValidator {
    /// Validate an input and return all validation errors found.
    ///
    /// # Errors
    ///
    /// Returns a `Vec<ValidationError>` if any validation rules are violated.
    pub fn validate(input: &IssueInput) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        // Title: Required, max 500 chars.
        if input.title.trim().is_empty() {
            errors.push(ValidationError::new("title", "cannot be empty"));
        } else if input.title.chars().count() > MAX_TITLE_CHARS {
            errors.push(ValidationError::new("title", "exceeds 500 characters"));
        }

        // Description: Required, max 100KB.
        if input.description.trim().is_empty() {
            errors.push(ValidationError::new("description", "cannot be empty"));
        } else if input.description.len() > MAX_DESCRIPTION_BYTES {
            errors.push(ValidationError::new("description", "exceeds 100KB"));
        }

        if input.category.is_none() {
            errors.push(ValidationError::new("category", "is required"));
        }

        match input.location {
            None => errors.push(ValidationError::new(
                "location",
                "is required; select a location on the map",
            )),
            Some(location) if !location.is_valid() => errors.push(ValidationError::new(
                "location",
                "must have finite lat in [-90, 90] and lng in [-180, 180]",
            )),
            Some(_) => {}
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
