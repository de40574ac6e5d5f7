//! Account service trait definition.

use crate::dto::{
    Credentials, MessageResponse, ProfileResponse, SignupRequest, SignupResponse,
    UpdateProfileRequest, UpdateProfileResponse,
};
use account_core::AccountResult;
use async_trait::async_trait;

/// Account service trait.
///
/// One implementation owns the user store; the REST layer talks to it
/// exclusively through this interface.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Authenticates the supplied credentials and returns the matched user
    /// id. Fails identically for an unknown user and a wrong password.
    async fn authenticate(&self, credentials: &Credentials) -> AccountResult<String>;

    /// Creates a new account. No authentication required.
    async fn signup(&self, request: SignupRequest) -> AccountResult<SignupResponse>;

    /// Returns the profile for `user_id`. Open to any authenticated caller.
    async fn get_profile(&self, user_id: &str) -> AccountResult<ProfileResponse>;

    /// Applies a partial profile update. Only the record's owner may
    /// update it.
    async fn update_profile(
        &self,
        user_id: &str,
        caller: &str,
        request: UpdateProfileRequest,
    ) -> AccountResult<UpdateProfileResponse>;

    /// Deletes the caller's own record. Closing is always self-service.
    async fn close_account(&self, caller: &str) -> AccountResult<MessageResponse>;
}
