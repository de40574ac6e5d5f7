//! Account service implementation.

use crate::account_service::AccountService;
use crate::dto::{
    CreatedUser, Credentials, MessageResponse, ProfileResponse, SignupRequest, SignupResponse,
    UpdateProfileRequest, UpdateProfileResponse,
};
use account_core::{validation_errors_to_cause, AccountError, AccountResult, UserRecord};
use account_repository::UserStore;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

/// Generic account service implementation over any `UserStore`.
pub struct AccountServiceImpl<S: UserStore> {
    store: Arc<S>,
}

impl<S: UserStore> AccountServiceImpl<S> {
    /// Creates a new account service.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: UserStore + 'static> AccountService for AccountServiceImpl<S> {
    async fn authenticate(&self, credentials: &Credentials) -> AccountResult<String> {
        debug!("Authenticating: {}", credentials.user_id);

        // Unknown user and wrong password collapse into one failure so the
        // response does not leak which check failed.
        match self.store.get(&credentials.user_id).await? {
            Some(record) if record.verify_password(&credentials.password) => Ok(record.user_id),
            _ => Err(AccountError::Unauthorized),
        }
    }

    async fn signup(&self, request: SignupRequest) -> AccountResult<SignupResponse> {
        debug!("Signup: {:?}", request.user_id);

        let (user_id, password) = match (&request.user_id, &request.password) {
            (Some(user_id), Some(password)) => (user_id.clone(), password.clone()),
            _ => {
                return Err(AccountError::validation(
                    "Account creation failed",
                    "required user_id and password",
                ))
            }
        };

        request.validate().map_err(|errors| {
            AccountError::validation("Account creation failed", validation_errors_to_cause(&errors))
        })?;

        let record = UserRecord::new(user_id, password);
        let created = CreatedUser {
            user_id: record.user_id.clone(),
            nickname: record.nickname.clone(),
        };

        // The duplicate check and the write are one atomic store call.
        if !self.store.insert(record).await? {
            return Err(AccountError::conflict(
                "Account creation failed",
                "Already same user_id is used",
            ));
        }

        info!("Account created: {}", created.user_id);
        Ok(SignupResponse {
            message: "Account successfully created".to_string(),
            user: created,
        })
    }

    async fn get_profile(&self, user_id: &str) -> AccountResult<ProfileResponse> {
        debug!("Getting profile: {}", user_id);

        let record = self
            .store
            .get(user_id)
            .await?
            .ok_or_else(|| AccountError::not_found("No user found"))?;

        Ok(ProfileResponse::from(record))
    }

    async fn update_profile(
        &self,
        user_id: &str,
        caller: &str,
        request: UpdateProfileRequest,
    ) -> AccountResult<UpdateProfileResponse> {
        debug!("Updating profile: {} (caller: {})", user_id, caller);

        if caller != user_id {
            return Err(AccountError::forbidden("No permission for update"));
        }

        let mut record = self
            .store
            .get(user_id)
            .await?
            .ok_or_else(|| AccountError::not_found("No user found"))?;

        // Both supplied fields validate fully before anything is written.
        request.validate().map_err(|errors| {
            AccountError::validation("User update failed", validation_errors_to_cause(&errors))
        })?;

        let changes = request.into_changes().ok_or_else(|| {
            AccountError::validation("User update failed", "required nickname or comment")
        })?;
        record.apply(changes);

        if !self.store.update(record.clone()).await? {
            // The record vanished between the read and the write.
            return Err(AccountError::not_found("No user found"));
        }

        info!("Profile updated: {}", user_id);
        Ok(UpdateProfileResponse {
            message: "User successfully updated.".to_string(),
            user: ProfileResponse::from(record),
        })
    }

    async fn close_account(&self, caller: &str) -> AccountResult<MessageResponse> {
        debug!("Closing account: {}", caller);

        if !self.store.delete(caller).await? {
            // Defensive: authentication just confirmed presence, but the
            // record may have been removed in between.
            return Err(AccountError::not_found("No user found to remove."));
        }

        info!("Account closed: {}", caller);
        Ok(MessageResponse {
            message: "Account and user successfully removed.".to_string(),
        })
    }
}

impl<S: UserStore> std::fmt::Debug for AccountServiceImpl<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountServiceImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use account_core::ErrorBody;
    use account_repository::MemoryUserStore;
    use mockall::mock;
    use mockall::predicate::eq;

    fn service() -> AccountServiceImpl<MemoryUserStore> {
        AccountServiceImpl::new(Arc::new(MemoryUserStore::new()))
    }

    fn signup_request(user_id: &str, password: &str) -> SignupRequest {
        SignupRequest {
            user_id: Some(user_id.to_string()),
            password: Some(password.to_string()),
        }
    }

    async fn signup_taro(service: &AccountServiceImpl<MemoryUserStore>) {
        service
            .signup(signup_request("TaroYamada01", "PaSSwd4TY"))
            .await
            .unwrap();
    }

    fn credentials(user_id: &str, password: &str) -> Credentials {
        Credentials::new(user_id, password)
    }

    #[tokio::test]
    async fn test_signup_defaults_nickname_to_user_id() {
        let service = service();
        let response = service
            .signup(signup_request("TaroYamada01", "PaSSwd4TY"))
            .await
            .unwrap();

        assert_eq!(response.message, "Account successfully created");
        assert_eq!(response.user.user_id, "TaroYamada01");
        assert_eq!(response.user.nickname, "TaroYamada01");

        let profile = service.get_profile("TaroYamada01").await.unwrap();
        assert_eq!(profile.comment, None);
    }

    #[tokio::test]
    async fn test_signup_duplicate_fails_regardless_of_password() {
        let service = service();
        signup_taro(&service).await;

        let err = service
            .signup(signup_request("TaroYamada01", "Different9"))
            .await
            .unwrap_err();
        match err {
            AccountError::Conflict { cause, .. } => {
                assert_eq!(cause, "Already same user_id is used");
            }
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_signup_missing_fields() {
        let service = service();
        let err = service.signup(SignupRequest::default()).await.unwrap_err();
        match err {
            AccountError::Validation { cause, .. } => {
                assert_eq!(cause, "required user_id and password");
            }
            other => panic!("expected validation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_signup_rejects_bad_inputs() {
        let service = service();
        let cases = [
            ("Taro1", "PaSSwd4TY", "input length is incorrect"),
            (
                "TaroYamada01TaroYamada01",
                "PaSSwd4TY",
                "input length is incorrect",
            ),
            ("Taro Yamada1", "PaSSwd4TY", "incorrect character pattern"),
            ("TaroYamada01", "short1!", "input length is incorrect"),
            ("TaroYamada01", "pass word4TY", "incorrect character pattern"),
        ];

        for (user_id, password, expected_cause) in cases {
            let err = service
                .signup(signup_request(user_id, password))
                .await
                .unwrap_err();
            match err {
                AccountError::Validation { message, cause } => {
                    assert_eq!(message, "Account creation failed");
                    assert_eq!(cause, expected_cause, "case: {}/{}", user_id, password);
                }
                other => panic!("expected validation, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_validation_happens_before_store_access() {
        let service = service();
        signup_taro(&service).await;

        // Existing user_id with an invalid password still reports the
        // validation failure, not the conflict.
        let err = service
            .signup(signup_request("TaroYamada01", "short"))
            .await
            .unwrap_err();
        assert!(matches!(err, AccountError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let service = service();
        signup_taro(&service).await;

        let user_id = service
            .authenticate(&credentials("TaroYamada01", "PaSSwd4TY"))
            .await
            .unwrap();
        assert_eq!(user_id, "TaroYamada01");
    }

    #[tokio::test]
    async fn test_authenticate_fails_identically_for_both_causes() {
        let service = service();
        signup_taro(&service).await;

        let unknown = service
            .authenticate(&credentials("NoSuchUser99", "PaSSwd4TY"))
            .await
            .unwrap_err();
        let wrong = service
            .authenticate(&credentials("TaroYamada01", "wrongpass1"))
            .await
            .unwrap_err();

        assert_eq!(unknown.status_code(), 401);
        assert_eq!(unknown.status_code(), wrong.status_code());
        assert_eq!(
            ErrorBody::from_error(&unknown).message,
            ErrorBody::from_error(&wrong).message
        );
    }

    #[tokio::test]
    async fn test_get_profile_not_found() {
        let service = service();
        let err = service.get_profile("NoSuchUser99").await.unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.to_string(), "No user found");
    }

    #[tokio::test]
    async fn test_update_by_non_owner_is_forbidden() {
        let service = service();
        signup_taro(&service).await;
        service
            .signup(signup_request("HanakoSuzuki", "PaSSwd4HS"))
            .await
            .unwrap();

        let request = UpdateProfileRequest {
            nickname: Some("Taro".to_string()),
            comment: None,
        };
        let err = service
            .update_profile("TaroYamada01", "HanakoSuzuki", request)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 403);
        assert_eq!(err.to_string(), "No permission for update");
    }

    #[tokio::test]
    async fn test_update_with_no_fields_fails() {
        let service = service();
        signup_taro(&service).await;

        let err = service
            .update_profile("TaroYamada01", "TaroYamada01", UpdateProfileRequest::default())
            .await
            .unwrap_err();
        match err {
            AccountError::Validation { message, cause } => {
                assert_eq!(message, "User update failed");
                assert_eq!(cause, "required nickname or comment");
            }
            other => panic!("expected validation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_validates_before_writing_anything() {
        let service = service();
        signup_taro(&service).await;

        // Valid nickname plus an oversized comment: nothing is applied.
        let request = UpdateProfileRequest {
            nickname: Some("Taro".to_string()),
            comment: Some("c".repeat(101)),
        };
        let err = service
            .update_profile("TaroYamada01", "TaroYamada01", request)
            .await
            .unwrap_err();
        assert!(matches!(err, AccountError::Validation { .. }));

        let profile = service.get_profile("TaroYamada01").await.unwrap();
        assert_eq!(profile.nickname, "TaroYamada01");
        assert_eq!(profile.comment, None);
    }

    #[tokio::test]
    async fn test_partial_update_is_idempotent() {
        let service = service();
        signup_taro(&service).await;

        let comment_only = UpdateProfileRequest {
            nickname: None,
            comment: Some("hello".to_string()),
        };
        let first = service
            .update_profile("TaroYamada01", "TaroYamada01", comment_only.clone())
            .await
            .unwrap();
        assert_eq!(first.user.nickname, "TaroYamada01");
        assert_eq!(first.user.comment.as_deref(), Some("hello"));

        let second = service
            .update_profile("TaroYamada01", "TaroYamada01", comment_only)
            .await
            .unwrap();
        assert_eq!(first.user, second.user);

        let nickname_only = UpdateProfileRequest {
            nickname: Some("Taro".to_string()),
            comment: None,
        };
        let third = service
            .update_profile("TaroYamada01", "TaroYamada01", nickname_only)
            .await
            .unwrap();
        assert_eq!(third.user.nickname, "Taro");
        assert_eq!(third.user.comment.as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let service = service();
        let request = UpdateProfileRequest {
            nickname: Some("Taro".to_string()),
            comment: None,
        };
        let err = service
            .update_profile("NoSuchUser99", "NoSuchUser99", request)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_close_account_removes_only_the_caller() {
        let service = service();
        signup_taro(&service).await;
        service
            .signup(signup_request("HanakoSuzuki", "PaSSwd4HS"))
            .await
            .unwrap();

        let response = service.close_account("TaroYamada01").await.unwrap();
        assert_eq!(response.message, "Account and user successfully removed.");

        let err = service.get_profile("TaroYamada01").await.unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert!(service.get_profile("HanakoSuzuki").await.is_ok());
    }

    #[tokio::test]
    async fn test_close_account_when_already_gone() {
        let service = service();
        let err = service.close_account("TaroYamada01").await.unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.to_string(), "No user found to remove.");
    }

    mock! {
        Store {}

        #[async_trait]
        impl UserStore for Store {
            async fn get(&self, user_id: &str) -> AccountResult<Option<UserRecord>>;
            async fn insert(&self, record: UserRecord) -> AccountResult<bool>;
            async fn update(&self, record: UserRecord) -> AccountResult<bool>;
            async fn delete(&self, user_id: &str) -> AccountResult<bool>;
            async fn exists(&self, user_id: &str) -> AccountResult<bool>;
        }
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_as_internal_error() {
        let mut store = MockStore::new();
        store
            .expect_get()
            .with(eq("TaroYamada01"))
            .returning(|_| Err(AccountError::internal("store unavailable")));

        let service = AccountServiceImpl::new(Arc::new(store));
        let err = service.get_profile("TaroYamada01").await.unwrap_err();
        assert_eq!(err.status_code(), 500);
    }
}
