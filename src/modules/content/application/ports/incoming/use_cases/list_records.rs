use async_trait::async_trait;

use crate::modules::content::domain::Resource;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListRecordsError {
    #[error("Failed to fetch records: {0}")]
    FetchFailed(String),
}

#[async_trait]
pub trait ListRecordsUseCase<R: Resource>: Send + Sync {
    /// Full list in the order the content API returns it.
    async fn execute(&self) -> Result<Vec<R>, ListRecordsError>;
}
