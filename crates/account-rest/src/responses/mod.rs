//! API response types.

use account_core::{AccountError, ErrorBody};
use axum::{
    http::{header::WWW_AUTHENTICATE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::debug;

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub AccountError);

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        debug!(
            code = self.0.error_code(),
            status = status.as_u16(),
            "Request failed: {}",
            self.0
        );

        let body = Json(ErrorBody::from_error(&self.0));
        let mut response = (status, body).into_response();

        // Every 401 advertises the expected auth scheme.
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Basic"));
        }

        response
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}
