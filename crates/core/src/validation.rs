//! Request validation helpers.
//!
//! DTOs derive [`validator::Validate`]; this module turns the collected
//! failures into a single [`CoreError::Validation`] and hosts the custom
//! field rules the derive attributes refer to.

use chrono::Datelike;
use validator::{ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Earliest accepted album release year.
pub const MIN_RELEASE_YEAR: i64 = 1900;

/// Run `validate()` on `input` and convert failures into [`CoreError`].
pub fn validate<T: validator::Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(format_errors(&errors)))
}

/// Render every failing field as `field: message`, sorted by field name and
/// joined with `", "`.
pub fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<(String, String)> = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        let field = field.to_string();
        for error in field_errors.iter() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string());
            messages.push((field.clone(), message));
        }
    }

    messages.sort();
    messages
        .into_iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Latest accepted album release year: the current year plus one.
pub fn max_release_year() -> i64 {
    i64::from(chrono::Utc::now().year()) + 1
}

/// Release years must fall between 1900 and next year.
///
/// Used as a `custom` rule on `Option<i64>` fields, so the derive hands over
/// the inner value.
pub fn validate_release_year(year: i64) -> Result<(), ValidationError> {
    if year < MIN_RELEASE_YEAR {
        return Err(with_message("release_year", "Release year too old"));
    }
    if year > max_release_year() {
        return Err(with_message(
            "release_year",
            "Release year cannot be in the future",
        ));
    }
    Ok(())
}

/// Every id in a list must be a positive integer.
pub fn validate_positive_ids(ids: &[i64]) -> Result<(), ValidationError> {
    if ids.iter().any(|id| *id <= 0) {
        return Err(with_message("positive_ids", "Artist ID must be positive"));
    }
    Ok(())
}

/// Build a [`ValidationError`] carrying a human-readable message.
pub fn with_message(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}
