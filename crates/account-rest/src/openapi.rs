//! OpenAPI documentation configuration.
//!
//! This module provides OpenAPI/Swagger documentation generation for the REST API.

use account_core::ErrorBody;
use account_service::{
    CreatedUser, MessageResponse, ProfileResponse, SignupRequest, SignupResponse,
    UpdateProfileRequest, UpdateProfileResponse,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// OpenAPI documentation for the Account API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Account API",
        version = "1.0.0",
        description = "Minimal account management API with HTTP Basic authentication"
    ),
    paths(
        crate::controllers::account_controller::signup,
        crate::controllers::account_controller::close_account,
        crate::controllers::user_controller::get_user,
        crate::controllers::user_controller::update_user,
        crate::controllers::health_controller::health_check,
    ),
    components(
        schemas(
            ErrorBody,
            SignupRequest,
            SignupResponse,
            CreatedUser,
            UpdateProfileRequest,
            UpdateProfileResponse,
            ProfileResponse,
            MessageResponse,
            crate::controllers::health_controller::HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "account", description = "Account lifecycle endpoints"),
        (name = "users", description = "User profile endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

/// Security addon for HTTP Basic authentication.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Basic)
                        .description(Some("HTTP Basic authentication"))
                        .build(),
                ),
            );
        }
    }
}
