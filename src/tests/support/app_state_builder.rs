use actix_web::web;
use std::sync::Arc;

use crate::auth::application::use_cases::fetch_admin_profile::IFetchAdminProfileUseCase;
use crate::auth::application::use_cases::login_admin::ILoginAdminUseCase;
use crate::auth::application::use_cases::update_admin_profile::IUpdateAdminProfileUseCase;
use crate::content::application::content_use_cases::ContentUseCases;
use crate::content::application::ports::incoming::use_cases::{
    DeleteRecordUseCase, ListRecordsUseCase, PrepareRecordFormUseCase, SubmitRecordUseCase,
};
use crate::content::domain::{Award, Project, Research, Skill};
use crate::site::application::ports::incoming::use_cases::{
    GetHomePageUseCase, GetSectionPageUseCase,
};
use crate::site::application::services::GetSectionPageService;
use crate::tests::support::gateway::PathGateway;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Every use case defaults to a stub or to real services over an empty
/// `PathGateway`; tests swap in the one they exercise.
pub struct TestAppStateBuilder {
    login_admin: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    fetch_admin_profile: Arc<dyn IFetchAdminProfileUseCase + Send + Sync>,
    update_admin_profile: Arc<dyn IUpdateAdminProfileUseCase + Send + Sync>,
    home_page: Arc<dyn GetHomePageUseCase + Send + Sync>,
    section_page: Option<Arc<dyn GetSectionPageUseCase + Send + Sync>>,
    content: ContentUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            login_admin: Arc::new(StubLoginAdmin),
            fetch_admin_profile: Arc::new(StubFetchAdminProfile),
            update_admin_profile: Arc::new(StubUpdateAdminProfile),
            home_page: Arc::new(StubGetHomePage(Default::default())),
            section_page: None,
            content: ContentUseCases::over(Arc::new(PathGateway::new())),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login_admin(mut self, uc: impl ILoginAdminUseCase + 'static) -> Self {
        self.login_admin = Arc::new(uc);
        self
    }

    pub fn with_fetch_admin_profile(
        mut self,
        uc: impl IFetchAdminProfileUseCase + 'static,
    ) -> Self {
        self.fetch_admin_profile = Arc::new(uc);
        self
    }

    pub fn with_update_admin_profile(
        mut self,
        uc: impl IUpdateAdminProfileUseCase + 'static,
    ) -> Self {
        self.update_admin_profile = Arc::new(uc);
        self
    }

    pub fn with_home_page(mut self, uc: impl GetHomePageUseCase + 'static) -> Self {
        self.home_page = Arc::new(uc);
        self
    }

    pub fn with_section_page(mut self, uc: impl GetSectionPageUseCase + 'static) -> Self {
        self.section_page = Some(Arc::new(uc));
        self
    }

    pub fn with_award_list(mut self, uc: impl ListRecordsUseCase<Award> + 'static) -> Self {
        self.content.award.list = Arc::new(uc);
        self
    }

    pub fn with_skill_list(mut self, uc: impl ListRecordsUseCase<Skill> + 'static) -> Self {
        self.content.skill.list = Arc::new(uc);
        self
    }

    pub fn with_award_form(
        mut self,
        uc: impl PrepareRecordFormUseCase<Award> + 'static,
    ) -> Self {
        self.content.award.prepare_form = Arc::new(uc);
        self
    }

    pub fn with_award_submit(mut self, uc: impl SubmitRecordUseCase<Award> + 'static) -> Self {
        self.content.award.submit = Arc::new(uc);
        self
    }

    pub fn with_project_submit(
        mut self,
        uc: impl SubmitRecordUseCase<Project> + 'static,
    ) -> Self {
        self.content.project.submit = Arc::new(uc);
        self
    }

    pub fn with_research_delete(
        mut self,
        uc: impl DeleteRecordUseCase<Research> + 'static,
    ) -> Self {
        self.content.research.delete = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let section_page = self
            .section_page
            .unwrap_or_else(|| Arc::new(GetSectionPageService::new(self.content.clone())));

        web::Data::new(AppState {
            login_admin_use_case: self.login_admin,
            fetch_admin_profile_use_case: self.fetch_admin_profile,
            update_admin_profile_use_case: self.update_admin_profile,
            home_page_use_case: self.home_page,
            section_page_use_case: section_page,
            content: self.content,
        })
    }
}
