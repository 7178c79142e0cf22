use async_trait::async_trait;

use crate::auth::application::domain::entities::{AdminProfile, AdminProfileUpdate, AdminSession};
use crate::auth::application::use_cases::fetch_admin_profile::AdminProfileError;

#[async_trait]
pub trait IUpdateAdminProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        session: &AdminSession,
        update: AdminProfileUpdate,
    ) -> Result<AdminProfile, AdminProfileError>;
}
