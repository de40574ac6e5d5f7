//! HTTP Basic credentials extractor.

use crate::responses::AppError;
use account_core::AccountError;
use account_service::Credentials;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    headers::{authorization::Basic, Authorization},
    TypedHeader,
};

/// Extracts HTTP Basic credentials from the `Authorization` header.
///
/// A missing or malformed header is indistinguishable from bad credentials
/// at the wire level: both produce the same authentication failure.
#[derive(Debug, Clone)]
pub struct BasicCredentials(pub Credentials);

#[async_trait]
impl<S> FromRequestParts<S> for BasicCredentials
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(basic)) =
            TypedHeader::<Authorization<Basic>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError(AccountError::Unauthorized))?;

        Ok(Self(Credentials::new(basic.username(), basic.password())))
    }
}
