use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    LoginAdminRequestDto, LoginAdminResponse, UpdateAdminProfileRequest,
};
use crate::auth::application::domain::entities::AdminProfile;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Site API",
        version = "1.0.0",
        description = "Public portfolio pages and the admin dashboard backed by the content API"
    ),
    paths(
        // Health
        crate::health::health,
        crate::health::readiness,

        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_admin::login_admin_handler,

        // Admin profile endpoints
        crate::auth::adapter::incoming::web::routes::admin_profile::fetch_admin_profile_handler,
        crate::auth::adapter::incoming::web::routes::admin_profile::update_admin_profile_handler,

        // Site endpoints
        crate::site::adapter::incoming::web::routes::get_home_page::get_home_page_handler,
        crate::site::adapter::incoming::web::routes::get_section_page::get_section_page_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<LoginAdminResponse>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            LoginAdminRequestDto,
            LoginAdminResponse,
            UpdateAdminProfileRequest,
            AdminProfile,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Liveness and readiness probes"),
        (name = "auth", description = "Admin login"),
        (name = "admin", description = "Admin account profile"),
        (name = "site", description = "Public portfolio pages"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Token returned by /api/dashboard/login"))
                        .build(),
                ),
            )
        }
    }
}
