//! Result type alias for the account API.

use crate::AccountError;

/// A specialized `Result` type for account operations.
pub type AccountResult<T> = Result<T, AccountError>;
