//! Account lifecycle controller: signup and closure.

use crate::{
    extractors::BasicCredentials,
    responses::{ok, ApiResult},
    state::AppState,
};
use account_service::{MessageResponse, SignupRequest, SignupResponse};
use axum::{extract::State, routing::post, Json, Router};
use tracing::debug;

/// Creates the account router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/close", post(close_account))
}

/// Create a new account.
///
/// The body is taken as `Option<Json<_>>` so that a missing or malformed
/// body surfaces as a precondition failure instead of a framework 422.
#[utoipa::path(
    post,
    path = "/signup",
    tag = "account",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Account created", body = SignupResponse),
        (status = 400, description = "Validation or duplicate id failure")
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    body: Option<Json<SignupRequest>>,
) -> ApiResult<SignupResponse> {
    let request = body.map(|Json(request)| request).unwrap_or_default();
    debug!(user_id = ?request.user_id, "Signup request");

    let response = state.account_service.signup(request).await?;
    ok(response)
}

/// Close the authenticated caller's account.
#[utoipa::path(
    post,
    path = "/close",
    tag = "account",
    security(("basic_auth" = [])),
    responses(
        (status = 200, description = "Account removed", body = MessageResponse),
        (status = 401, description = "Authentication failed")
    )
)]
pub async fn close_account(
    State(state): State<AppState>,
    BasicCredentials(credentials): BasicCredentials,
) -> ApiResult<MessageResponse> {
    let caller = state.account_service.authenticate(&credentials).await?;
    debug!(%caller, "Close account request");

    let response = state.account_service.close_account(&caller).await?;
    ok(response)
}
