//! User profile controller.

use crate::{
    extractors::BasicCredentials,
    responses::{ok, ApiResult},
    state::AppState,
};
use account_service::{ProfileResponse, UpdateProfileRequest, UpdateProfileResponse};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::debug;

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new().route("/:user_id", get(get_user).patch(update_user))
}

/// Get a user's profile.
///
/// Any authenticated caller may read any profile; authorization is only
/// enforced on writes.
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = String, Path, description = "Account id")),
    security(("basic_auth" = [])),
    responses(
        (status = 200, description = "Profile found", body = ProfileResponse),
        (status = 401, description = "Authentication failed"),
        (status = 404, description = "No user found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    BasicCredentials(credentials): BasicCredentials,
    Path(user_id): Path<String>,
) -> ApiResult<ProfileResponse> {
    let caller = state.account_service.authenticate(&credentials).await?;
    debug!(%caller, %user_id, "Get profile request");

    let response = state.account_service.get_profile(&user_id).await?;
    ok(response)
}

/// Update a user's profile. Owners only.
#[utoipa::path(
    patch,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = String, Path, description = "Account id")),
    security(("basic_auth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = UpdateProfileResponse),
        (status = 400, description = "Validation failure"),
        (status = 401, description = "Authentication failed"),
        (status = 403, description = "Not the record owner"),
        (status = 404, description = "No user found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    BasicCredentials(credentials): BasicCredentials,
    Path(user_id): Path<String>,
    body: Option<Json<UpdateProfileRequest>>,
) -> ApiResult<UpdateProfileResponse> {
    let caller = state.account_service.authenticate(&credentials).await?;
    debug!(%caller, %user_id, "Update profile request");

    let request = body.map(|Json(request)| request).unwrap_or_default();
    let response = state
        .account_service
        .update_profile(&user_id, &caller, request)
        .await?;
    ok(response)
}
