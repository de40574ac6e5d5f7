//! Unified error types for all layers of the account API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the account API.
///
/// Every variant maps onto exactly one HTTP status; the REST layer performs
/// that translation in a single place. Errors are terminal for the request:
/// no retries, no partial application.
#[derive(Error, Debug)]
pub enum AccountError {
    /// Referenced user does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Request failed a precondition check before any store access.
    #[error("{message}")]
    Validation {
        message: String,
        cause: String,
    },

    /// Duplicate user_id at signup.
    #[error("{message}")]
    Conflict {
        message: String,
        cause: String,
    },

    /// Unknown user or wrong password. Carries no detail so the two cases
    /// are indistinguishable to the caller.
    #[error("Authentication failed")]
    Unauthorized,

    /// Caller is not the owner of the targeted record.
    #[error("{0}")]
    Forbidden(String),

    /// Configuration error at startup.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unexpected internal fault.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AccountError {
    /// Returns the HTTP status code for this error.
    ///
    /// Duplicate signups map to 400 rather than the conventional 409; the
    /// API contract pins both validation and conflict failures to 400.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation { .. } | Self::Conflict { .. } => 400,
            Self::Unauthorized => 401,
            Self::Forbidden(_) => 403,
            Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Conflict { .. } => "CONFLICT",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found<T: Into<String>>(message: T) -> Self {
        Self::NotFound(message.into())
    }

    /// Creates a validation error with a cause string.
    #[must_use]
    pub fn validation<M: Into<String>, C: Into<String>>(message: M, cause: C) -> Self {
        Self::Validation {
            message: message.into(),
            cause: cause.into(),
        }
    }

    /// Creates a conflict error with a cause string.
    #[must_use]
    pub fn conflict<M: Into<String>, C: Into<String>>(message: M, cause: C) -> Self {
        Self::Conflict {
            message: message.into(),
            cause: cause.into(),
        }
    }

    /// Creates a forbidden error.
    #[must_use]
    pub fn forbidden<T: Into<String>>(message: T) -> Self {
        Self::Forbidden(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

/// Serializable error body for API responses: `{message, cause}`.
///
/// `cause` is present only for validation and conflict failures; auth,
/// ownership, and not-found errors carry a message alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorBody {
    /// Human-readable error message.
    pub message: String,
    /// Failure cause string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl ErrorBody {
    /// Creates an error body from an `AccountError`.
    ///
    /// Internal faults are collapsed into a generic message so no
    /// implementation detail leaks to the caller.
    #[must_use]
    pub fn from_error(error: &AccountError) -> Self {
        let message = match error {
            AccountError::Configuration(_)
            | AccountError::Internal(_)
            | AccountError::Other(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };
        let cause = match error {
            AccountError::Validation { cause, .. } | AccountError::Conflict { cause, .. } => {
                Some(cause.clone())
            }
            _ => None,
        };
        Self { message, cause }
    }
}

impl From<&AccountError> for ErrorBody {
    fn from(error: &AccountError) -> Self {
        Self::from_error(error)
    }
}
