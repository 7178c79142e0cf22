use chrono::{DateTime, NaiveDate};
use serde::Serialize;

use super::entities::{
    Academic, Award, Certification, Experience, Profile, Project, Research, ResearchType, Skill,
    SocialLinks,
};
use super::resource::{Resource, ResourceKind};

/// Number of cards shown in a home-page preview.
pub const PREVIEW_LIMIT: usize = 2;

/// Characters kept before a description collapses behind "read more".
pub const READ_MORE_LIMIT: usize = 150;

//
// ──────────────────────────────────────────────────────────
// View mode
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Home-page preview: first two cards, title and see-more link.
    Preview,
    /// Dedicated listing page: every card, no navigation chrome.
    Page,
}

impl ViewMode {
    pub fn from_is_page(is_it_page: bool) -> Self {
        if is_it_page {
            ViewMode::Page
        } else {
            ViewMode::Preview
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeeMoreLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionView<C> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub cards: Vec<C>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub see_more: Option<SeeMoreLink>,
}

/// Applies the list-preview contract. `None` means "render nothing".
pub fn render_section<R: Presentable>(
    records: Option<Vec<R>>,
    mode: ViewMode,
) -> Option<SectionView<R::Card>> {
    let records = records.filter(|r| !r.is_empty())?;
    let kind = R::KIND;
    let total = records.len();

    match mode {
        ViewMode::Page => Some(SectionView {
            title: None,
            cards: records.iter().map(Presentable::to_card).collect(),
            see_more: None,
        }),
        ViewMode::Preview => Some(SectionView {
            title: Some(kind.display_name().to_string()),
            cards: records
                .iter()
                .take(PREVIEW_LIMIT)
                .map(Presentable::to_card)
                .collect(),
            see_more: (total > PREVIEW_LIMIT).then(|| SeeMoreLink {
                label: format!("Show More {}", kind.display_name()),
                href: format!("/{}", kind.page_slug()),
            }),
        }),
    }
}

//
// ──────────────────────────────────────────────────────────
// Text helpers
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadMoreText {
    /// What the collapsed card shows.
    pub preview: String,
    pub full: String,
    pub truncated: bool,
}

impl ReadMoreText {
    pub fn new(text: &str) -> Self {
        Self::with_limit(text, READ_MORE_LIMIT)
    }

    pub fn with_limit(text: &str, limit: usize) -> Self {
        let full = text.trim().to_string();
        match full.char_indices().nth(limit) {
            None => Self {
                preview: full.clone(),
                full,
                truncated: false,
            },
            Some((cut, _)) => Self {
                preview: format!("{}...", full[..cut].trim_end()),
                full,
                truncated: true,
            },
        }
    }

    fn optional(text: Option<&str>) -> Option<Self> {
        text.filter(|t| !t.trim().is_empty()).map(Self::new)
    }
}

/// "Mon YYYY" for RFC 3339, `YYYY-MM-DD` and `YYYY-MM`; anything else verbatim.
pub fn format_month_year(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%b %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
        return date.format("%b %Y").to_string();
    }
    raw.to_string()
}

fn format_optional_date(raw: Option<&str>) -> Option<String> {
    raw.filter(|d| !d.trim().is_empty()).map(format_month_year)
}

/// `ongoing` renders the end as "Present", but only after a start date.
pub fn format_period(start: Option<&str>, end: Option<&str>, ongoing: bool) -> Option<String> {
    let start = format_optional_date(start);
    if ongoing {
        return start.map(|s| format!("{s} - Present"));
    }

    match (start, format_optional_date(end)) {
        (Some(s), Some(e)) => Some(format!("{s} - {e}")),
        (Some(s), None) => Some(s),
        (None, Some(e)) => Some(e),
        (None, None) => None,
    }
}

//
// ──────────────────────────────────────────────────────────
// Cards
// ──────────────────────────────────────────────────────────
//

/// A record that can be rendered as a card in a section.
pub trait Presentable: Resource {
    type Card: Serialize + Clone + std::fmt::Debug + Send + Sync;

    fn to_card(&self) -> Self::Card;
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub name: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub about: ReadMoreText,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub social_links: SocialLinks,
    pub resume_url: Option<String>,
    pub profile_image: Option<String>,
    pub about_image: Option<String>,
}

impl From<&Profile> for ProfileView {
    fn from(p: &Profile) -> Self {
        Self {
            name: p.name.clone(),
            hero_title: p.hero_title.clone(),
            hero_subtitle: p.hero_subtitle.clone(),
            about: ReadMoreText::new(&p.about),
            email: p.email.clone(),
            phone: p.phone.clone(),
            location: p.location.clone(),
            social_links: p.social_links.clone(),
            resume_url: p.resume_url.clone(),
            profile_image: p.profile_image.clone(),
            about_image: p.about_image.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicCard {
    pub id: Option<String>,
    pub degree: String,
    pub institution: String,
    pub field_of_study: Option<String>,
    pub period: Option<String>,
    pub gpa: Option<String>,
    pub description: Option<ReadMoreText>,
    pub achievements: Vec<String>,
    pub owner_email: Option<String>,
}

impl Presentable for Academic {
    type Card = AcademicCard;

    fn to_card(&self) -> AcademicCard {
        AcademicCard {
            id: self.id.clone(),
            degree: self.degree.clone(),
            institution: self.institution.clone(),
            field_of_study: self.field_of_study.clone(),
            period: format_period(
                self.start_date.as_deref(),
                self.end_date.as_deref(),
                false,
            ),
            gpa: self.gpa.clone(),
            description: ReadMoreText::optional(self.description.as_deref()),
            achievements: self.achievements.clone(),
            owner_email: self.owner_email.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceCard {
    pub id: Option<String>,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub period: Option<String>,
    pub current: bool,
    pub description: ReadMoreText,
    pub responsibilities: Vec<String>,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
    pub images: Vec<String>,
    pub owner_email: Option<String>,
}

impl Presentable for Experience {
    type Card = ExperienceCard;

    fn to_card(&self) -> ExperienceCard {
        let ongoing = self.current || self.end_date.as_deref().map_or(true, str::is_empty);
        ExperienceCard {
            id: self.id.clone(),
            title: self.title.clone(),
            company: self.company.clone(),
            location: self.location.clone(),
            period: format_period(Some(&self.start_date), self.end_date.as_deref(), ongoing),
            current: self.current,
            description: ReadMoreText::new(&self.description),
            responsibilities: self.responsibilities.clone(),
            achievements: self.achievements.clone(),
            technologies: self.technologies.clone(),
            images: self.images.clone(),
            owner_email: self.owner_email.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    pub id: Option<String>,
    pub title: String,
    pub description: ReadMoreText,
    pub technologies: Vec<String>,
    pub images: Vec<String>,
    pub period: Option<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub features: Vec<String>,
    pub status: Option<String>,
    pub owner_email: Option<String>,
}

impl Presentable for Project {
    type Card = ProjectCard;

    fn to_card(&self) -> ProjectCard {
        ProjectCard {
            id: self.id.clone(),
            title: self.title.clone(),
            description: ReadMoreText::new(&self.description),
            technologies: self.technologies.clone(),
            images: self.images.clone(),
            period: format_period(
                self.start_date.as_deref(),
                self.end_date.as_deref(),
                false,
            ),
            live_url: self.live_url.clone(),
            github_url: self.github_url.clone(),
            features: self.features.clone(),
            status: self.status.clone(),
            owner_email: self.owner_email.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCard {
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub skill_type: Option<String>,
    pub category: Option<String>,
    pub description: Option<ReadMoreText>,
    pub logo: Option<String>,
}

impl Presentable for Skill {
    type Card = SkillCard;

    fn to_card(&self) -> SkillCard {
        SkillCard {
            id: self.id.clone(),
            name: self.name.clone(),
            skill_type: self.skill_type.clone(),
            category: self.category.clone(),
            description: ReadMoreText::optional(self.description.as_deref()),
            logo: self.logo.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardCard {
    pub id: Option<String>,
    pub title: String,
    pub issuer: String,
    pub date: Option<String>,
    pub category: Option<String>,
    pub description: Option<ReadMoreText>,
    pub link: Option<String>,
    pub image: Option<String>,
    pub owner_email: Option<String>,
}

impl Presentable for Award {
    type Card = AwardCard;

    fn to_card(&self) -> AwardCard {
        AwardCard {
            id: self.id.clone(),
            title: self.title.clone(),
            issuer: self.issuer.clone(),
            date: format_optional_date(self.date.as_deref()),
            category: self.category.clone(),
            description: ReadMoreText::optional(self.description.as_deref()),
            link: self.link.clone(),
            image: self.image.clone(),
            owner_email: self.owner_email.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationCard {
    pub id: Option<String>,
    pub title: String,
    pub issuer: String,
    pub issued: Option<String>,
    pub expires: Option<String>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub image: Option<String>,
    pub owner_email: Option<String>,
}

impl Presentable for Certification {
    type Card = CertificationCard;

    fn to_card(&self) -> CertificationCard {
        CertificationCard {
            id: self.id.clone(),
            title: self.title.clone(),
            issuer: self.issuer.clone(),
            issued: format_optional_date(self.date.as_deref()),
            expires: format_optional_date(self.expiry_date.as_deref()),
            credential_id: self.credential_id.clone(),
            credential_url: self.credential_url.clone(),
            image: self.image.clone(),
            owner_email: self.owner_email.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchCard {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub research_type: ResearchType,
    pub title: String,
    pub description: ReadMoreText,
    pub authors: Vec<String>,
    pub date: Option<String>,
    pub journal: Option<String>,
    pub doi: Option<String>,
    pub link: Option<String>,
    pub status: Option<String>,
    pub owner_email: Option<String>,
}

impl Presentable for Research {
    type Card = ResearchCard;

    fn to_card(&self) -> ResearchCard {
        ResearchCard {
            id: self.id.clone(),
            research_type: self.research_type,
            title: self.title.clone(),
            description: ReadMoreText::new(&self.description),
            authors: self.authors.clone(),
            date: format_optional_date(self.date.as_deref()),
            journal: self.journal.clone(),
            doi: self.doi.clone(),
            link: self.link.clone(),
            status: self.status.clone(),
            owner_email: self.owner_email.clone(),
        }
    }
}
