use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AdminCredentials;
use crate::auth::application::use_cases::login_admin::LoginError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Login request from the dashboard
#[derive(Deserialize, ToSchema)]
pub struct LoginAdminRequestDto {
    /// Admin username
    #[schema(example = "admin")]
    pub username: String,

    /// Password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginAdminResponse {
    /// Bearer token for dashboard calls; the browser stores it under `token`
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    token: String,

    /// Email used to prefill `ownerEmail` on new records
    #[schema(example = "admin@example.com")]
    owner_email: Option<String>,
}

/// Admin login
///
/// Forwards the credentials to the content API and returns its token.
#[utoipa::path(
    post,
    path = "/api/dashboard/login",
    tag = "auth",
    request_body = LoginAdminRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<LoginAdminResponse>),
            example = json!({
                "success": true,
                "data": {
                    "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "ownerEmail": "admin@example.com"
                }
            })
        ),
        (
            status = 400,
            description = "Blank username or password",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Username cannot be empty"
                }
            })
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid username or password"
                }
            })
        ),
        (
            status = 502,
            description = "Content API unavailable or answered without a token",
            body = ErrorResponse
        ),
    )
)]
#[post("/api/dashboard/login")]
pub async fn login_admin_handler(
    req: web::Json<LoginAdminRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(username = %dto.username, "Login attempt");

    let credentials = match AdminCredentials::new(dto.username, dto.password) {
        Ok(c) => c,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.login_admin_use_case.execute(credentials).await {
        Ok(outcome) => ApiResponse::success(LoginAdminResponse {
            token: outcome.token,
            owner_email: outcome.owner_email,
        }),

        Err(LoginError::Validation(e)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(LoginError::InvalidCredentials(message)) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", &message)
        }

        Err(LoginError::MissingToken) => {
            error!("Login response from content API had no token");
            ApiResponse::bad_gateway("UPSTREAM_INVALID_RESPONSE", "Login response had no token")
        }

        Err(LoginError::Upstream(ref e)) => {
            error!(error = %e, "Login failed: content API unavailable");
            ApiResponse::bad_gateway("UPSTREAM_UNAVAILABLE", "Login service is unavailable")
        }
    }
}
