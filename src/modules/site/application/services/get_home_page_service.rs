use async_trait::async_trait;
use tracing::warn;

use super::section_loader::load_section;
use crate::content::application::content_use_cases::ContentUseCases;
use crate::content::domain::presentation::{ProfileView, ViewMode};
use crate::content::domain::{
    Academic, Award, Certification, Experience, Project, Research, Skill,
};
use crate::site::application::ports::incoming::use_cases::{
    GetHomePageUseCase, HomeView, PROFILE_UNAVAILABLE,
};

pub struct GetHomePageService {
    content: ContentUseCases,
}

impl GetHomePageService {
    pub fn new(content: ContentUseCases) -> Self {
        Self { content }
    }
}

#[async_trait]
impl GetHomePageUseCase for GetHomePageService {
    async fn execute(&self) -> HomeView {
        let content = &self.content;
        let mode = ViewMode::Preview;

        let (
            profile,
            academics,
            experience,
            projects,
            skills,
            certifications,
            awards,
            research,
        ) = futures::join!(
            content.profile.list.execute(),
            load_section::<Academic>(content, mode),
            load_section::<Experience>(content, mode),
            load_section::<Project>(content, mode),
            load_section::<Skill>(content, mode),
            load_section::<Certification>(content, mode),
            load_section::<Award>(content, mode),
            load_section::<Research>(content, mode),
        );

        let (profile, profile_error) = match profile {
            Ok(profiles) => (profiles.first().map(ProfileView::from), None),
            Err(e) => {
                warn!(error = %e, "Profile fetch failed");
                (None, Some(PROFILE_UNAVAILABLE.to_string()))
            }
        };

        HomeView {
            profile,
            profile_error,
            academics,
            experience,
            projects,
            skills,
            certifications,
            awards,
            research,
        }
    }
}
