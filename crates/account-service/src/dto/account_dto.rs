//! Account-related DTOs.

use account_core::rules::{valid_password, valid_user_id};
use account_core::{ProfileChanges, UserRecord};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a new account.
///
/// Fields are optional at the deserialization boundary so that a missing
/// field is reported as an explicit precondition failure rather than a
/// framework-level rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    /// Desired account id: half-width alphanumerics and underscore, 6-20 chars.
    #[validate(
        length(min = 6, max = 20, message = "input length is incorrect"),
        custom(function = valid_user_id, message = "incorrect character pattern")
    )]
    pub user_id: Option<String>,

    /// Password: printable ASCII excluding space and control codes, 8-20 chars.
    #[validate(
        length(min = 8, max = 20, message = "input length is incorrect"),
        custom(function = valid_password, message = "incorrect character pattern")
    )]
    pub password: Option<String>,
}

/// Request to update nickname and/or comment. At least one field must be
/// present; absent fields keep their prior value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    /// New display name; when present must be 1-30 chars.
    #[validate(length(min = 1, max = 30, message = "invalid nickname length"))]
    pub nickname: Option<String>,

    /// New comment; when present must be at most 100 chars.
    #[validate(length(max = 100, message = "invalid comment length"))]
    pub comment: Option<String>,
}

impl UpdateProfileRequest {
    /// Converts the request into an explicit change set; `None` when both
    /// fields are absent.
    #[must_use]
    pub fn into_changes(self) -> Option<ProfileChanges> {
        ProfileChanges::from_fields(self.nickname, self.comment)
    }
}

/// Identity returned by signup. Never includes the password.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedUser {
    pub user_id: String,
    pub nickname: String,
}

/// Profile response DTO. `comment` serializes as null when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub user_id: String,
    pub nickname: String,
    pub comment: Option<String>,
}

impl From<UserRecord> for ProfileResponse {
    fn from(record: UserRecord) -> Self {
        Self {
            user_id: record.user_id,
            nickname: record.nickname,
            comment: record.comment,
        }
    }
}

impl From<&UserRecord> for ProfileResponse {
    fn from(record: &UserRecord) -> Self {
        Self {
            user_id: record.user_id.clone(),
            nickname: record.nickname.clone(),
            comment: record.comment.clone(),
        }
    }
}

/// Signup response: message plus the created identity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignupResponse {
    pub message: String,
    pub user: CreatedUser,
}

/// Update response: message plus the updated profile.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileResponse {
    pub message: String,
    pub user: ProfileResponse,
}

/// Plain message response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
