use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::auth::application::domain::entities::{AdminProfile, AdminSession};
use crate::auth::application::use_cases::fetch_admin_profile::{
    AdminProfileError, IFetchAdminProfileUseCase, ADMIN_PROFILE_PATH,
};
use crate::content::application::ports::outgoing::{ContentGateway, GatewayRequest};

pub struct FetchAdminProfileService {
    gateway: Arc<dyn ContentGateway>,
}

impl FetchAdminProfileService {
    pub fn new(gateway: Arc<dyn ContentGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl IFetchAdminProfileUseCase for FetchAdminProfileService {
    async fn execute(&self, session: &AdminSession) -> Result<AdminProfile, AdminProfileError> {
        let response = self
            .gateway
            .send(GatewayRequest::get(ADMIN_PROFILE_PATH).with_bearer(&session.token))
            .await
            .map_err(|e| {
                warn!(error = %e, "Fetching admin profile failed");
                AdminProfileError::from_gateway(e, "Failed to load admin profile")
            })?;

        response
            .decode()
            .map_err(|e| AdminProfileError::Upstream(e.to_string()))
    }
}
