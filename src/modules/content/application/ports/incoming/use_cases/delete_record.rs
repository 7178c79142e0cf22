use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::domain::entities::AdminSession;
use crate::modules::content::domain::Resource;

/// Deletion only proceeds once the admin has confirmed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteConfirmation {
    Confirmed,
    Pending,
}

impl From<bool> for DeleteConfirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            DeleteConfirmation::Confirmed
        } else {
            DeleteConfirmation::Pending
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome<R> {
    pub records: Option<Vec<R>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteRecordError {
    #[error("Deletion must be confirmed")]
    NotConfirmed,

    #[error("This resource cannot be deleted")]
    NotSupported,

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Content API unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait DeleteRecordUseCase<R: Resource>: Send + Sync {
    async fn execute(
        &self,
        session: &AdminSession,
        id: &str,
        confirmation: DeleteConfirmation,
    ) -> Result<DeleteOutcome<R>, DeleteRecordError>;
}
