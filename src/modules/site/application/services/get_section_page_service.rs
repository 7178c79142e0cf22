use async_trait::async_trait;

use super::section_loader::load_section;
use crate::content::application::content_use_cases::ContentUseCases;
use crate::content::domain::presentation::ViewMode;
use crate::content::domain::{
    Academic, Award, Certification, Experience, Project, Research, ResourceKind, Skill,
};
use crate::site::application::ports::incoming::use_cases::{
    GetSectionPageError, GetSectionPageUseCase, SectionCards, SectionPage,
};

pub struct GetSectionPageService {
    content: ContentUseCases,
}

impl GetSectionPageService {
    pub fn new(content: ContentUseCases) -> Self {
        Self { content }
    }
}

#[async_trait]
impl GetSectionPageUseCase for GetSectionPageService {
    async fn execute(&self, page_slug: &str) -> Result<SectionPage, GetSectionPageError> {
        let kind = ResourceKind::from_page_slug(page_slug)
            .filter(|k| !k.is_singleton())
            .ok_or_else(|| GetSectionPageError::NotFound(page_slug.to_string()))?;

        let content = &self.content;
        let mode = ViewMode::Page;

        let section = match kind {
            ResourceKind::Academic => load_section::<Academic>(content, mode)
                .await
                .map(SectionCards::Academics),
            ResourceKind::Experience => load_section::<Experience>(content, mode)
                .await
                .map(SectionCards::Experience),
            ResourceKind::Project => load_section::<Project>(content, mode)
                .await
                .map(SectionCards::Projects),
            ResourceKind::Skill => load_section::<Skill>(content, mode)
                .await
                .map(SectionCards::Skills),
            ResourceKind::Certification => load_section::<Certification>(content, mode)
                .await
                .map(SectionCards::Certifications),
            ResourceKind::Award => load_section::<Award>(content, mode)
                .await
                .map(SectionCards::Awards),
            ResourceKind::Research => load_section::<Research>(content, mode)
                .await
                .map(SectionCards::Research),
            ResourceKind::Profile => {
                return Err(GetSectionPageError::NotFound(page_slug.to_string()))
            }
        };

        Ok(SectionPage {
            page_slug: kind.page_slug(),
            title: kind.display_name(),
            section,
        })
    }
}
