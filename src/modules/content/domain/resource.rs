use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;

//
// ──────────────────────────────────────────────────────────
// ResourceKind
// ──────────────────────────────────────────────────────────
//

/// One content-type collection exposed by the content API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Profile,
    Academic,
    Experience,
    Project,
    Skill,
    Award,
    Certification,
    Research,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 8] = [
        ResourceKind::Profile,
        ResourceKind::Academic,
        ResourceKind::Experience,
        ResourceKind::Project,
        ResourceKind::Skill,
        ResourceKind::Award,
        ResourceKind::Certification,
        ResourceKind::Research,
    ];

    /// Path segment used by the content API (`/api/{slug}`).
    pub fn slug(&self) -> &'static str {
        match self {
            ResourceKind::Profile => "profile",
            ResourceKind::Academic => "academic",
            ResourceKind::Experience => "experience",
            ResourceKind::Project => "project",
            ResourceKind::Skill => "skill",
            ResourceKind::Award => "award",
            ResourceKind::Certification => "certification",
            ResourceKind::Research => "research",
        }
    }

    /// Path segment of the dedicated public listing page.
    pub fn page_slug(&self) -> &'static str {
        match self {
            ResourceKind::Profile => "profile",
            ResourceKind::Academic => "academics",
            ResourceKind::Experience => "experience",
            ResourceKind::Project => "projects",
            ResourceKind::Skill => "skills",
            ResourceKind::Award => "awards",
            ResourceKind::Certification => "certifications",
            ResourceKind::Research => "research",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceKind::Profile => "Profile",
            ResourceKind::Academic => "Academics",
            ResourceKind::Experience => "Experience",
            ResourceKind::Project => "Projects",
            ResourceKind::Skill => "Skills",
            ResourceKind::Award => "Awards",
            ResourceKind::Certification => "Certifications",
            ResourceKind::Research => "Research",
        }
    }

    /// Singular, lower-case noun used in user-facing messages.
    pub fn noun(&self) -> &'static str {
        match self {
            ResourceKind::Academic => "academic record",
            other => other.slug(),
        }
    }

    /// The profile is a single document: every path is the collection path.
    pub fn is_singleton(&self) -> bool {
        matches!(self, ResourceKind::Profile)
    }

    pub fn collection_path(&self) -> String {
        format!("/api/{}", self.slug())
    }

    pub fn record_path(&self, id: &str) -> String {
        if self.is_singleton() {
            self.collection_path()
        } else {
            format!("/api/{}/{}", self.slug(), id)
        }
    }

    /// Multipart file fields accepted on submission. Empty means JSON only.
    pub fn file_fields(&self) -> &'static [&'static str] {
        match self {
            ResourceKind::Profile => &["profileImage", "aboutImage"],
            ResourceKind::Experience | ResourceKind::Project => &["images"],
            ResourceKind::Skill => &["logo"],
            ResourceKind::Award | ResourceKind::Certification => &["image"],
            ResourceKind::Academic | ResourceKind::Research => &[],
        }
    }

    pub fn from_page_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.page_slug() == slug)
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.slug() == slug)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

//
// ──────────────────────────────────────────────────────────
// Validation
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{kind} does not accept file uploads for field '{field}'")]
    UnsupportedUpload { kind: ResourceKind, field: String },

    #[error("invalid upload '{0}': {1}")]
    InvalidUpload(String, String),
}

/// Fails with `MissingField` when the value is empty or whitespace only.
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

//
// ──────────────────────────────────────────────────────────
// Resource
// ──────────────────────────────────────────────────────────
//

/// A record type served by the content API.
///
/// The content API is the sole source of truth; implementors are plain
/// documents that round-trip through JSON unchanged.
pub trait Resource:
    Serialize + DeserializeOwned + Default + Clone + fmt::Debug + Send + Sync + 'static
{
    const KIND: ResourceKind;

    fn id(&self) -> Option<&str>;

    fn set_id(&mut self, id: Option<String>);

    fn owner_email(&self) -> Option<&str>;

    fn set_owner_email(&mut self, email: Option<String>);

    /// Required-field check run before anything is sent.
    fn validate(&self) -> Result<(), ValidationError>;
}
