//! Authentication DTOs.

/// A username/password pair extracted from a Basic Authorization header.
///
/// Credentials are re-validated against the store on every request; there
/// is no session state.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// The user id presented as the Basic auth username.
    pub user_id: String,
    /// The plaintext password presented alongside it.
    pub password: String,
}

impl Credentials {
    /// Creates a new credential pair.
    pub fn new(user_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            password: password.into(),
        }
    }
}
