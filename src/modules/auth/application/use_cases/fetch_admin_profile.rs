use async_trait::async_trait;

use crate::auth::application::domain::entities::{
    AdminProfile, AdminProfileUpdateError, AdminSession,
};
use crate::content::application::ports::outgoing::GatewayError;

pub const ADMIN_PROFILE_PATH: &str = "/api/admin/profile";

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum AdminProfileError {
    #[error("Session is not authorized")]
    Unauthorized,

    #[error(transparent)]
    Validation(#[from] AdminProfileUpdateError),

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Content API unavailable: {0}")]
    Upstream(String),
}

impl AdminProfileError {
    pub(crate) fn from_gateway(error: GatewayError, fallback: &str) -> Self {
        match error {
            GatewayError::Rejected {
                status: 401 | 403, ..
            } => AdminProfileError::Unauthorized,
            GatewayError::Rejected { status, message } => AdminProfileError::Rejected {
                status,
                message: message.unwrap_or_else(|| fallback.to_string()),
            },
            GatewayError::Unavailable(msg) | GatewayError::InvalidPayload(msg) => {
                AdminProfileError::Upstream(msg)
            }
        }
    }
}

#[async_trait]
pub trait IFetchAdminProfileUseCase: Send + Sync {
    async fn execute(&self, session: &AdminSession) -> Result<AdminProfile, AdminProfileError>;
}
