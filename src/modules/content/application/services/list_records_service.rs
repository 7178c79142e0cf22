use async_trait::async_trait;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::warn;

use crate::modules::content::application::helpers::decode_records;
use crate::modules::content::application::ports::incoming::use_cases::{
    ListRecordsError, ListRecordsUseCase,
};
use crate::modules::content::application::ports::outgoing::{ContentGateway, GatewayRequest};
use crate::modules::content::domain::Resource;

pub struct ListRecordsService<R: Resource> {
    gateway: Arc<dyn ContentGateway>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Resource> ListRecordsService<R> {
    pub fn new(gateway: Arc<dyn ContentGateway>) -> Self {
        Self {
            gateway,
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<R: Resource> ListRecordsUseCase<R> for ListRecordsService<R> {
    async fn execute(&self) -> Result<Vec<R>, ListRecordsError> {
        let response = self
            .gateway
            .send(GatewayRequest::get(R::KIND.collection_path()))
            .await
            .map_err(|e| {
                warn!(resource = %R::KIND, error = %e, "Failed to fetch records");
                ListRecordsError::FetchFailed(e.to_string())
            })?;

        decode_records(response.body).map_err(|e| ListRecordsError::FetchFailed(e.to_string()))
    }
}
