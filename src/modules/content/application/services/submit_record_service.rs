use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::domain::entities::AdminSession;
use crate::modules::content::application::helpers::{
    check_uploads, decode_record, encode_record_body,
};
use crate::modules::content::application::ports::incoming::use_cases::{
    ListRecordsUseCase, SubmitOutcome, SubmitRecordCommand, SubmitRecordError,
    SubmitRecordUseCase,
};
use crate::modules::content::application::ports::outgoing::{
    ContentGateway, GatewayError, GatewayRequest, HttpMethod,
};
use crate::modules::content::domain::Resource;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct SubmitRecordService<R: Resource> {
    gateway: Arc<dyn ContentGateway>,
    refresh: Arc<dyn ListRecordsUseCase<R>>,
}

impl<R: Resource> SubmitRecordService<R> {
    /// `refresh` runs once after every successful save.
    pub fn new(gateway: Arc<dyn ContentGateway>, refresh: Arc<dyn ListRecordsUseCase<R>>) -> Self {
        Self { gateway, refresh }
    }
}

fn map_gateway_error(kind_noun: &str, err: GatewayError) -> SubmitRecordError {
    match err {
        GatewayError::Rejected { status, message } => SubmitRecordError::Rejected {
            status,
            message: message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| format!("Failed to save {kind_noun}")),
        },
        GatewayError::Unavailable(msg) | GatewayError::InvalidPayload(msg) => {
            SubmitRecordError::Unavailable(msg)
        }
    }
}

/// The content API may answer with the document itself or wrap it in `data`.
fn saved_record<R: Resource>(body: Value) -> Option<R> {
    let document = match body {
        Value::Object(mut map) if map.contains_key("data") => map.remove("data")?,
        other => other,
    };
    decode_record::<R>(document)
        .ok()
        .filter(|record| record.id().is_some())
}

#[async_trait]
impl<R: Resource> SubmitRecordUseCase<R> for SubmitRecordService<R> {
    async fn execute(
        &self,
        session: &AdminSession,
        command: SubmitRecordCommand<R>,
    ) -> Result<SubmitOutcome<R>, SubmitRecordError> {
        let SubmitRecordCommand {
            mut record,
            uploads,
        } = command;

        record.validate()?;
        check_uploads::<R>(&uploads)?;

        let id = record
            .id()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string);

        let (method, path) = match &id {
            Some(id) => (HttpMethod::Put, R::KIND.record_path(id)),
            None => {
                record.set_id(None);
                if record.owner_email().is_none() {
                    record.set_owner_email(session.owner_email.clone());
                }
                (HttpMethod::Post, R::KIND.collection_path())
            }
        };

        let body = encode_record_body(&record, uploads)
            .map_err(|e| SubmitRecordError::Unavailable(e.to_string()))?;

        let response = self
            .gateway
            .send(
                GatewayRequest::new(method, path)
                    .with_bearer(&session.token)
                    .with_body(body),
            )
            .await
            .map_err(|e| {
                warn!(resource = %R::KIND, error = %e, "Record submission failed");
                map_gateway_error(R::KIND.noun(), e)
            })?;

        info!(resource = %R::KIND, %method, "Record saved");

        let saved = saved_record::<R>(response.body);

        let records = match self.refresh.execute().await {
            Ok(records) => Some(records),
            Err(e) => {
                warn!(resource = %R::KIND, error = %e, "Refresh after save failed");
                None
            }
        };

        Ok(SubmitOutcome {
            saved,
            records,
            modal_closed: true,
        })
    }
}
