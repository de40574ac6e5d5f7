//! User record entity.

use serde::{Deserialize, Serialize};

/// A user record as held by the store.
///
/// The record's existence is its only lifecycle state: created by signup,
/// mutated by profile updates (owner only), destroyed when the owner
/// closes the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique, immutable primary key.
    pub user_id: String,

    /// Opaque credential, compared byte-for-byte (never exposed via API).
    #[serde(skip_serializing)]
    pub password: String,

    /// Display name, 1-30 chars. Never empty after creation.
    pub nickname: String,

    /// Free-form comment, up to 100 chars.
    pub comment: Option<String>,
}

impl UserRecord {
    /// Creates a new record. The nickname defaults to the user id and the
    /// comment starts unset.
    #[must_use]
    pub fn new(user_id: String, password: String) -> Self {
        Self {
            nickname: user_id.clone(),
            user_id,
            password,
            comment: None,
        }
    }

    /// Checks the supplied password byte-for-byte against the stored one.
    /// Passwords are held and compared as plain bytes, never hashed.
    #[must_use]
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password.as_bytes() == candidate.as_bytes()
    }

    /// Applies a partial profile update. Fields not covered by `changes`
    /// keep their prior value.
    pub fn apply(&mut self, changes: ProfileChanges) {
        match changes {
            ProfileChanges::Nickname(nickname) => self.nickname = nickname,
            ProfileChanges::Comment(comment) => self.comment = Some(comment),
            ProfileChanges::Both { nickname, comment } => {
                self.nickname = nickname;
                self.comment = Some(comment);
            }
        }
    }
}

/// A partial profile update with at least one field present.
///
/// The "neither field supplied" case is unrepresentable here; the API
/// boundary reports it as a validation failure instead of constructing one
/// of these variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileChanges {
    /// Only the nickname changes.
    Nickname(String),
    /// Only the comment changes.
    Comment(String),
    /// Both fields change.
    Both { nickname: String, comment: String },
}

impl ProfileChanges {
    /// Builds a change set from optional fields; `None` when both are
    /// absent.
    #[must_use]
    pub fn from_fields(nickname: Option<String>, comment: Option<String>) -> Option<Self> {
        match (nickname, comment) {
            (Some(nickname), Some(comment)) => Some(Self::Both { nickname, comment }),
            (Some(nickname), None) => Some(Self::Nickname(nickname)),
            (None, Some(comment)) => Some(Self::Comment(comment)),
            (None, None) => None,
        }
    }
}
