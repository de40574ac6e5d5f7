//! Validation utilities.

use validator::ValidationErrors;

/// Extracts a single cause string from `validator::ValidationErrors`.
///
/// Messages are sorted and deduplicated so the reported cause is
/// deterministic when several fields fail at once.
#[must_use]
pub fn validation_errors_to_cause(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|errors| errors.iter())
        .map(|error| {
            error
                .message
                .as_ref()
                .map_or_else(|| error.code.to_string(), ToString::to_string)
        })
        .collect();
    messages.sort();
    messages.dedup();
    messages.join("; ")
}

/// Common validation functions for account fields.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a user id consists of half-width alphanumerics and
    /// underscores only.
    pub fn valid_user_id(user_id: &str) -> Result<(), ValidationError> {
        if !user_id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ValidationError::new("user_id_invalid_characters"));
        }
        Ok(())
    }

    /// Validates that a password consists of printable ASCII characters
    /// excluding space and control codes (`!`..=`~`).
    pub fn valid_password(password: &str) -> Result<(), ValidationError> {
        if !password.chars().all(|c| ('!'..='~').contains(&c)) {
            return Err(ValidationError::new("password_invalid_characters"));
        }
        Ok(())
    }
}
