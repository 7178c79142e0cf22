use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::domain::entities::{
    AdminCredentials, AdminCredentialsError, LoginOutcome,
};
use crate::content::application::ports::outgoing::{
    ContentGateway, GatewayError, GatewayRequest, HttpMethod, RequestBody,
};

pub const ADMIN_LOGIN_PATH: &str = "/api/admin/login";

// ====================== Login Error =============================
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error(transparent)]
    Validation(#[from] AdminCredentialsError),

    #[error("{0}")]
    InvalidCredentials(String),

    #[error("Login response did not contain a token")]
    MissingToken,

    #[error("Login service unavailable: {0}")]
    Upstream(String),
}

// ====================== Login response shape ====================
/// Token and owner email as the content API may spell them.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LoginPayload {
    token: Option<String>,
    access_token: Option<String>,
    email: Option<String>,
    owner_email: Option<String>,
    admin: Option<AdminPayload>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AdminPayload {
    email: Option<String>,
}

impl LoginPayload {
    fn into_outcome(self) -> Result<LoginOutcome, LoginError> {
        let token = self
            .token
            .or(self.access_token)
            .filter(|t| !t.trim().is_empty())
            .ok_or(LoginError::MissingToken)?;

        let owner_email = self
            .email
            .or(self.owner_email)
            .or(self.admin.and_then(|a| a.email))
            .filter(|e| !e.trim().is_empty());

        Ok(LoginOutcome { token, owner_email })
    }
}

// ============================ Login Admin Use Case =============================
#[async_trait]
pub trait ILoginAdminUseCase: Send + Sync {
    async fn execute(&self, credentials: AdminCredentials) -> Result<LoginOutcome, LoginError>;
}

#[derive(Clone)]
pub struct LoginAdminUseCase {
    gateway: Arc<dyn ContentGateway>,
}

impl LoginAdminUseCase {
    pub fn new(gateway: Arc<dyn ContentGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl ILoginAdminUseCase for LoginAdminUseCase {
    async fn execute(&self, credentials: AdminCredentials) -> Result<LoginOutcome, LoginError> {
        let request = GatewayRequest::new(HttpMethod::Post, ADMIN_LOGIN_PATH).with_body(
            RequestBody::Json(json!({
                "username": credentials.username(),
                "password": credentials.password(),
            })),
        );

        let response = self.gateway.send(request).await.map_err(|e| match e {
            GatewayError::Rejected {
                status: 400 | 401 | 403,
                message,
            } => {
                warn!(username = %credentials.username(), "Admin login rejected");
                LoginError::InvalidCredentials(
                    message.unwrap_or_else(|| "Invalid username or password".to_string()),
                )
            }
            other => LoginError::Upstream(other.to_string()),
        })?;

        let payload: LoginPayload = response
            .decode()
            .map_err(|e| LoginError::Upstream(e.to_string()))?;
        let outcome = payload.into_outcome()?;

        info!(username = %credentials.username(), "Admin logged in");
        Ok(outcome)
    }
}
