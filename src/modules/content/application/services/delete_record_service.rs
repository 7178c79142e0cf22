use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::domain::entities::AdminSession;
use crate::modules::content::application::ports::incoming::use_cases::{
    DeleteConfirmation, DeleteOutcome, DeleteRecordError, DeleteRecordUseCase, ListRecordsUseCase,
};
use crate::modules::content::application::ports::outgoing::{
    ContentGateway, GatewayError, GatewayRequest,
};
use crate::modules::content::domain::Resource;

pub struct DeleteRecordService<R: Resource> {
    gateway: Arc<dyn ContentGateway>,
    refresh: Arc<dyn ListRecordsUseCase<R>>,
}

impl<R: Resource> DeleteRecordService<R> {
    pub fn new(gateway: Arc<dyn ContentGateway>, refresh: Arc<dyn ListRecordsUseCase<R>>) -> Self {
        Self { gateway, refresh }
    }
}

#[async_trait]
impl<R: Resource> DeleteRecordUseCase<R> for DeleteRecordService<R> {
    async fn execute(
        &self,
        session: &AdminSession,
        id: &str,
        confirmation: DeleteConfirmation,
    ) -> Result<DeleteOutcome<R>, DeleteRecordError> {
        if R::KIND.is_singleton() {
            return Err(DeleteRecordError::NotSupported);
        }
        if confirmation != DeleteConfirmation::Confirmed {
            return Err(DeleteRecordError::NotConfirmed);
        }

        self.gateway
            .send(GatewayRequest::delete(R::KIND.record_path(id)).with_bearer(&session.token))
            .await
            .map_err(|e| {
                warn!(resource = %R::KIND, id, error = %e, "Record deletion failed");
                match e {
                    GatewayError::Rejected { status, message } => DeleteRecordError::Rejected {
                        status,
                        message: message
                            .filter(|m| !m.trim().is_empty())
                            .unwrap_or_else(|| format!("Failed to delete {}", R::KIND.noun())),
                    },
                    GatewayError::Unavailable(msg) | GatewayError::InvalidPayload(msg) => {
                        DeleteRecordError::Unavailable(msg)
                    }
                }
            })?;

        info!(resource = %R::KIND, id, "Record deleted");

        let records = match self.refresh.execute().await {
            Ok(records) => Some(records),
            Err(e) => {
                warn!(resource = %R::KIND, error = %e, "Refresh after delete failed");
                None
            }
        };

        Ok(DeleteOutcome { records })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::modules::content::application::ports::outgoing::{GatewayResponse, HttpMethod};
    use crate::modules::content::application::services::ListRecordsService;
    use crate::modules::content::domain::{Profile, Research};
    use crate::tests::support::fixtures::session;
    use crate::tests::support::gateway::RecordingGateway;

    fn service_over(gateway: Arc<RecordingGateway>) -> DeleteRecordService<Research> {
        let refresh = Arc::new(ListRecordsService::<Research>::new(gateway.clone()));
        DeleteRecordService::new(gateway, refresh)
    }

    #[tokio::test]
    async fn test_confirmed_delete_issues_one_delete_and_one_refetch() {
        let gateway = RecordingGateway::with_responses(vec![
            Ok(GatewayResponse::ok(json!({ "message": "deleted" }))),
            Ok(GatewayResponse::ok(json!([{ "_id": "r2", "title": "Other" }]))),
        ]);
        let service = service_over(gateway.clone());

        let outcome = service
            .execute(&session(), "r1", DeleteConfirmation::Confirmed)
            .await
            .unwrap();

        let requests = gateway.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, HttpMethod::Delete);
        assert_eq!(requests[0].path, "/api/research/r1");
        assert_eq!(requests[0].bearer.as_deref(), Some("test-token"));
        assert_eq!(requests[1].method, HttpMethod::Get);
        assert_eq!(requests[1].path, "/api/research");

        let remaining = outcome.records.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id.as_deref(), Some("r2"));
    }

    #[tokio::test]
    async fn test_unconfirmed_delete_sends_nothing() {
        let gateway = RecordingGateway::with_responses(vec![]);
        let service = service_over(gateway.clone());

        let result = service
            .execute(&session(), "r1", DeleteConfirmation::from(false))
            .await;

        assert_eq!(result.unwrap_err(), DeleteRecordError::NotConfirmed);
        assert!(gateway.requests().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_delete_does_not_refetch() {
        let gateway = RecordingGateway::with_responses(vec![Err(GatewayError::Rejected {
            status: 401,
            message: None,
        })]);
        let service = service_over(gateway.clone());

        let result = service
            .execute(&session(), "r1", DeleteConfirmation::Confirmed)
            .await;

        assert_eq!(
            result.unwrap_err(),
            DeleteRecordError::Rejected {
                status: 401,
                message: "Failed to delete research".to_string()
            }
        );
        assert_eq!(gateway.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_profile_cannot_be_deleted() {
        let gateway = RecordingGateway::with_responses(vec![]);
        let refresh = Arc::new(ListRecordsService::<Profile>::new(gateway.clone()));
        let service = DeleteRecordService::<Profile>::new(gateway.clone(), refresh);

        let result = service
            .execute(&session(), "p1", DeleteConfirmation::Confirmed)
            .await;

        assert_eq!(result.unwrap_err(), DeleteRecordError::NotSupported);
        assert!(gateway.requests().is_empty());
    }
}
