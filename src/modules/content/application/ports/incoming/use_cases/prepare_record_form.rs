use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::domain::entities::AdminSession;
use crate::modules::content::domain::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    Create,
    Edit,
}

/// Field values the dashboard form starts from.
#[derive(Debug, Clone, Serialize)]
pub struct RecordForm<R> {
    pub mode: FormMode,
    pub record: R,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrepareFormError {
    #[error("Record not found")]
    NotFound,

    #[error("Failed to load record: {0}")]
    FetchFailed(String),
}

#[async_trait]
pub trait PrepareRecordFormUseCase<R: Resource>: Send + Sync {
    /// `None` prepares a blank create form owned by the session's email.
    async fn execute(
        &self,
        session: &AdminSession,
        id: Option<String>,
    ) -> Result<RecordForm<R>, PrepareFormError>;
}
