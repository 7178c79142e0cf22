use async_trait::async_trait;
use serde::Serialize;

use crate::content::domain::presentation::{
    AcademicCard, AwardCard, CertificationCard, ExperienceCard, ProfileView, ProjectCard,
    ResearchCard, SectionView, SkillCard,
};

pub const PROFILE_UNAVAILABLE: &str = "Unable to load profile data";

/// Everything the public home page renders. A `None` section is not shown.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub profile: Option<ProfileView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_error: Option<String>,
    pub academics: Option<SectionView<AcademicCard>>,
    pub experience: Option<SectionView<ExperienceCard>>,
    pub projects: Option<SectionView<ProjectCard>>,
    pub skills: Option<SectionView<SkillCard>>,
    pub certifications: Option<SectionView<CertificationCard>>,
    pub awards: Option<SectionView<AwardCard>>,
    pub research: Option<SectionView<ResearchCard>>,
}

#[async_trait]
pub trait GetHomePageUseCase: Send + Sync {
    /// Never fails: unreachable sections are left out.
    async fn execute(&self) -> HomeView;
}
