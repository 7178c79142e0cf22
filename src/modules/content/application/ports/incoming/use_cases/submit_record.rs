use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::domain::entities::AdminSession;
use crate::modules::content::application::ports::outgoing::FilePart;
use crate::modules::content::domain::{Resource, ValidationError};

#[derive(Debug, Clone)]
pub struct SubmitRecordCommand<R> {
    /// A record with an id is an update; without one it is a create.
    pub record: R,
    pub uploads: Vec<FilePart>,
}

impl<R> SubmitRecordCommand<R> {
    pub fn json(record: R) -> Self {
        Self {
            record,
            uploads: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOutcome<R> {
    /// The stored document, when the content API echoes it back.
    pub saved: Option<R>,
    /// The refreshed list; `None` if the refresh after saving failed.
    pub records: Option<Vec<R>>,
    pub modal_closed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRecordError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Content API unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait SubmitRecordUseCase<R: Resource>: Send + Sync {
    async fn execute(
        &self,
        session: &AdminSession,
        command: SubmitRecordCommand<R>,
    ) -> Result<SubmitOutcome<R>, SubmitRecordError>;
}
