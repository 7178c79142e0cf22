use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::domain::entities::{AdminProfile, AdminProfileUpdate, AdminSession};
use crate::auth::application::use_cases::fetch_admin_profile::{
    AdminProfileError, ADMIN_PROFILE_PATH,
};
use crate::auth::application::use_cases::update_admin_profile::IUpdateAdminProfileUseCase;
use crate::content::application::ports::outgoing::{
    ContentGateway, GatewayRequest, HttpMethod, RequestBody,
};

pub struct UpdateAdminProfileService {
    gateway: Arc<dyn ContentGateway>,
}

impl UpdateAdminProfileService {
    pub fn new(gateway: Arc<dyn ContentGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl IUpdateAdminProfileUseCase for UpdateAdminProfileService {
    async fn execute(
        &self,
        session: &AdminSession,
        update: AdminProfileUpdate,
    ) -> Result<AdminProfile, AdminProfileError> {
        let body =
            serde_json::to_value(&update).map_err(|e| AdminProfileError::Upstream(e.to_string()))?;

        let response = self
            .gateway
            .send(
                GatewayRequest::new(HttpMethod::Put, ADMIN_PROFILE_PATH)
                    .with_bearer(&session.token)
                    .with_body(RequestBody::Json(body)),
            )
            .await
            .map_err(|e| {
                warn!(error = %e, "Updating admin profile failed");
                AdminProfileError::from_gateway(e, "Failed to update admin profile")
            })?;

        info!("Admin profile updated");

        // Some deployments answer `{ admin: {...} }`, others the bare document.
        let body = match response.body {
            Value::Object(mut map) if map.contains_key("admin") => {
                map.remove("admin").unwrap_or(Value::Null)
            }
            other => other,
        };

        if body.is_null() {
            return Ok(AdminProfile {
                username: update.username.unwrap_or_default(),
                email: update.email.unwrap_or_default(),
                name: update.name.unwrap_or_default(),
                ..AdminProfile::default()
            });
        }

        serde_json::from_value(body).map_err(|e| AdminProfileError::Upstream(e.to_string()))
    }
}
