use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::auth::application::domain::entities::{
    AdminCredentials, AdminProfile, AdminProfileUpdate, AdminSession, LoginOutcome,
};
use crate::auth::application::use_cases::fetch_admin_profile::{
    AdminProfileError, IFetchAdminProfileUseCase,
};
use crate::auth::application::use_cases::login_admin::{ILoginAdminUseCase, LoginError};
use crate::auth::application::use_cases::update_admin_profile::IUpdateAdminProfileUseCase;
use crate::content::application::ports::incoming::use_cases::{
    DeleteConfirmation, DeleteOutcome, DeleteRecordError, DeleteRecordUseCase, ListRecordsError,
    ListRecordsUseCase, PrepareFormError, PrepareRecordFormUseCase, RecordForm,
    SubmitOutcome, SubmitRecordCommand, SubmitRecordError, SubmitRecordUseCase,
};
use crate::content::domain::Resource;
use crate::site::application::ports::incoming::use_cases::{GetHomePageUseCase, HomeView};

// ======================== Auth ========================

#[derive(Default, Clone)]
pub struct StubLoginAdmin;

#[async_trait]
impl ILoginAdminUseCase for StubLoginAdmin {
    async fn execute(&self, _credentials: AdminCredentials) -> Result<LoginOutcome, LoginError> {
        Err(LoginError::Upstream("not used in this test".to_string()))
    }
}

#[derive(Default, Clone)]
pub struct StubFetchAdminProfile;

#[async_trait]
impl IFetchAdminProfileUseCase for StubFetchAdminProfile {
    async fn execute(&self, _session: &AdminSession) -> Result<AdminProfile, AdminProfileError> {
        Err(AdminProfileError::Unauthorized)
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateAdminProfile;

#[async_trait]
impl IUpdateAdminProfileUseCase for StubUpdateAdminProfile {
    async fn execute(
        &self,
        _session: &AdminSession,
        _update: AdminProfileUpdate,
    ) -> Result<AdminProfile, AdminProfileError> {
        Err(AdminProfileError::Unauthorized)
    }
}

// ======================== Content ========================

pub struct StubListRecords<R> {
    result: Result<Vec<R>, ListRecordsError>,
}

impl<R> StubListRecords<R> {
    pub fn returning(records: Vec<R>) -> Self {
        Self {
            result: Ok(records),
        }
    }

    pub fn failing(error: ListRecordsError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl<R: Resource> ListRecordsUseCase<R> for StubListRecords<R> {
    async fn execute(&self) -> Result<Vec<R>, ListRecordsError> {
        self.result.clone()
    }
}

pub struct StubPrepareForm<R> {
    result: Result<RecordForm<R>, PrepareFormError>,
    seen_ids: Arc<Mutex<Vec<Option<String>>>>,
}

impl<R> StubPrepareForm<R> {
    pub fn returning(form: RecordForm<R>) -> Self {
        Self {
            result: Ok(form),
            seen_ids: Arc::default(),
        }
    }

    pub fn failing(error: PrepareFormError) -> Self {
        Self {
            result: Err(error),
            seen_ids: Arc::default(),
        }
    }

    pub fn seen_ids(&self) -> Arc<Mutex<Vec<Option<String>>>> {
        Arc::clone(&self.seen_ids)
    }
}

#[async_trait]
impl<R: Resource> PrepareRecordFormUseCase<R> for StubPrepareForm<R> {
    async fn execute(
        &self,
        _session: &AdminSession,
        id: Option<String>,
    ) -> Result<RecordForm<R>, PrepareFormError> {
        self.seen_ids.lock().unwrap().push(id);
        self.result.clone()
    }
}

pub struct StubSubmitRecord<R> {
    result: Result<SubmitOutcome<R>, SubmitRecordError>,
    seen: Arc<Mutex<Vec<SubmitRecordCommand<R>>>>,
}

impl<R> StubSubmitRecord<R> {
    pub fn returning(result: Result<SubmitOutcome<R>, SubmitRecordError>) -> Self {
        Self {
            result,
            seen: Arc::default(),
        }
    }

    pub fn seen(&self) -> Arc<Mutex<Vec<SubmitRecordCommand<R>>>> {
        Arc::clone(&self.seen)
    }
}

#[async_trait]
impl<R: Resource> SubmitRecordUseCase<R> for StubSubmitRecord<R> {
    async fn execute(
        &self,
        _session: &AdminSession,
        command: SubmitRecordCommand<R>,
    ) -> Result<SubmitOutcome<R>, SubmitRecordError> {
        self.seen.lock().unwrap().push(command);
        self.result.clone()
    }
}

pub struct StubDeleteRecord<R> {
    result: Result<DeleteOutcome<R>, DeleteRecordError>,
    seen: Arc<Mutex<Vec<(String, DeleteConfirmation)>>>,
}

impl<R> StubDeleteRecord<R> {
    pub fn returning(result: Result<DeleteOutcome<R>, DeleteRecordError>) -> Self {
        Self {
            result,
            seen: Arc::default(),
        }
    }

    pub fn seen(&self) -> Arc<Mutex<Vec<(String, DeleteConfirmation)>>> {
        Arc::clone(&self.seen)
    }
}

#[async_trait]
impl<R: Resource> DeleteRecordUseCase<R> for StubDeleteRecord<R> {
    async fn execute(
        &self,
        _session: &AdminSession,
        id: &str,
        confirmation: DeleteConfirmation,
    ) -> Result<DeleteOutcome<R>, DeleteRecordError> {
        self.seen
            .lock()
            .unwrap()
            .push((id.to_string(), confirmation));
        self.result.clone()
    }
}

// ======================== Site ========================

pub struct StubGetHomePage(pub HomeView);

#[async_trait]
impl GetHomePageUseCase for StubGetHomePage {
    async fn execute(&self) -> HomeView {
        self.0.clone()
    }
}
