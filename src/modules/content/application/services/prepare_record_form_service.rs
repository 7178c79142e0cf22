use async_trait::async_trait;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::auth::application::domain::entities::AdminSession;
use crate::modules::content::application::helpers::decode_records;
use crate::modules::content::application::ports::incoming::use_cases::{
    FormMode, PrepareFormError, PrepareRecordFormUseCase, RecordForm,
};
use crate::modules::content::application::ports::outgoing::{
    ContentGateway, GatewayError, GatewayRequest,
};
use crate::modules::content::domain::Resource;

pub struct PrepareRecordFormService<R: Resource> {
    gateway: Arc<dyn ContentGateway>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Resource> PrepareRecordFormService<R> {
    pub fn new(gateway: Arc<dyn ContentGateway>) -> Self {
        Self {
            gateway,
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<R: Resource> PrepareRecordFormUseCase<R> for PrepareRecordFormService<R> {
    async fn execute(
        &self,
        session: &AdminSession,
        id: Option<String>,
    ) -> Result<RecordForm<R>, PrepareFormError> {
        let Some(id) = id.filter(|id| !id.trim().is_empty()) else {
            let mut record = R::default();
            record.set_owner_email(session.owner_email.clone());
            return Ok(RecordForm {
                mode: FormMode::Create,
                record,
            });
        };

        let response = self
            .gateway
            .send(GatewayRequest::get(R::KIND.record_path(&id)).with_bearer(&session.token))
            .await
            .map_err(|e| match e {
                GatewayError::Rejected { status: 404, .. } => PrepareFormError::NotFound,
                other => PrepareFormError::FetchFailed(other.to_string()),
            })?;

        // The profile endpoint answers with the single document for any id.
        let mut record = decode_records::<R>(response.body)
            .map_err(|e| PrepareFormError::FetchFailed(e.to_string()))?
            .into_iter()
            .next()
            .ok_or(PrepareFormError::NotFound)?;

        if record.id().is_none() {
            record.set_id(Some(id));
        }

        Ok(RecordForm {
            mode: FormMode::Edit,
            record,
        })
    }
}
