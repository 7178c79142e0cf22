use async_trait::async_trait;
use serde::Serialize;

use crate::content::domain::presentation::{
    AcademicCard, AwardCard, CertificationCard, ExperienceCard, ProjectCard, ResearchCard,
    SectionView, SkillCard,
};

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SectionCards {
    Academics(SectionView<AcademicCard>),
    Experience(SectionView<ExperienceCard>),
    Projects(SectionView<ProjectCard>),
    Skills(SectionView<SkillCard>),
    Certifications(SectionView<CertificationCard>),
    Awards(SectionView<AwardCard>),
    Research(SectionView<ResearchCard>),
}

/// A dedicated listing page, e.g. `/awards`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionPage {
    pub page_slug: &'static str,
    pub title: &'static str,
    /// `None` when there is nothing to show or the fetch failed.
    pub section: Option<SectionCards>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetSectionPageError {
    #[error("No section page named '{0}'")]
    NotFound(String),
}

#[async_trait]
pub trait GetSectionPageUseCase: Send + Sync {
    async fn execute(&self, page_slug: &str) -> Result<SectionPage, GetSectionPageError>;
}
