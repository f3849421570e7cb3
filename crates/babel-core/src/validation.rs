//! Validation utilities.

use crate::BabelError;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `BabelError` on failure.
    fn validate_request(&self) -> Result<(), BabelError> {
        self.validate().map_err(validation_errors_to_babel_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `BabelError`.
///
/// Field messages are joined with `; ` in field-name order so the resulting
/// text is stable across runs.
#[must_use]
pub fn validation_errors_to_babel_error(errors: ValidationErrors) -> BabelError {
    let mut field_errors: Vec<(String, String)> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                (
                    (*field).to_string(),
                    error
                        .message
                        .as_ref()
                        .map_or_else(|| error.code.to_string(), |m| m.to_string()),
                )
            })
        })
        .collect();
    field_errors.sort();

    let message = field_errors
        .iter()
        .map(|(_, message)| message.as_str())
        .collect::<Vec<_>>()
        .join("; ");

    BabelError::Validation(message)
}
