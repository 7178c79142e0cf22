use serde::{Deserialize, Deserializer, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::resource::{require, Resource, ResourceKind, ValidationError};

// Identity plumbing shared by every record: `_id` and `ownerEmail`.
macro_rules! record_identity {
    () => {
        fn id(&self) -> Option<&str> {
            self.id.as_deref()
        }

        fn set_id(&mut self, id: Option<String>) {
            self.id = id;
        }

        fn owner_email(&self) -> Option<&str> {
            self.owner_email.as_deref()
        }

        fn set_owner_email(&mut self, email: Option<String>) {
            self.owner_email = email;
        }
    };
}

/// GPA is sent as a number by some records and as a string by others.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

//
// ──────────────────────────────────────────────────────────
// Profile
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialLinks {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub website: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub owner_email: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub hero_title: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub hero_subtitle: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub about: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub social_links: SocialLinks,
    pub resume_url: Option<String>,
    pub profile_image: Option<String>,
    pub about_image: Option<String>,
}

impl Resource for Profile {
    const KIND: ResourceKind = ResourceKind::Profile;

    record_identity!();

    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)
    }
}

//
// ──────────────────────────────────────────────────────────
// Academic
// ──────────────────────────────────────────────────────────
//

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Academic {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub owner_email: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub degree: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub institution: String,
    pub field_of_study: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub gpa: Option<String>,
    pub description: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub achievements: Vec<String>,
}

impl Resource for Academic {
    const KIND: ResourceKind = ResourceKind::Academic;

    record_identity!();

    fn validate(&self) -> Result<(), ValidationError> {
        require("degree", &self.degree)?;
        require("institution", &self.institution)
    }
}

//
// ──────────────────────────────────────────────────────────
// Experience
// ──────────────────────────────────────────────────────────
//

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub owner_email: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub title: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub company: String,
    pub location: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub start_date: String,
    pub end_date: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub current: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub description: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub responsibilities: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub achievements: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub technologies: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub images: Vec<String>,
}

impl Resource for Experience {
    const KIND: ResourceKind = ResourceKind::Experience;

    record_identity!();

    fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("company", &self.company)?;
        require("startDate", &self.start_date)
    }
}

//
// ──────────────────────────────────────────────────────────
// Project
// ──────────────────────────────────────────────────────────
//

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub owner_email: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub title: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub description: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub technologies: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub images: Vec<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub features: Vec<String>,
    pub status: Option<String>,
}

impl Resource for Project {
    const KIND: ResourceKind = ResourceKind::Project;

    record_identity!();

    fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("description", &self.description)
    }
}

//
// ──────────────────────────────────────────────────────────
// Skill
// ──────────────────────────────────────────────────────────
//

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Skill {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub owner_email: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    #[serde(rename = "type")]
    pub skill_type: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
}

impl Resource for Skill {
    const KIND: ResourceKind = ResourceKind::Skill;

    record_identity!();

    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)
    }
}

//
// ──────────────────────────────────────────────────────────
// Award
// ──────────────────────────────────────────────────────────
//

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Award {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub owner_email: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub title: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub issuer: String,
    pub date: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub image: Option<String>,
}

impl Resource for Award {
    const KIND: ResourceKind = ResourceKind::Award;

    record_identity!();

    fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("issuer", &self.issuer)
    }
}

//
// ──────────────────────────────────────────────────────────
// Certification
// ──────────────────────────────────────────────────────────
//

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certification {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub owner_email: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub title: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub issuer: String,
    pub date: Option<String>,
    pub expiry_date: Option<String>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub image: Option<String>,
}

impl Resource for Certification {
    const KIND: ResourceKind = ResourceKind::Certification;

    record_identity!();

    fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("issuer", &self.issuer)
    }
}

//
// ──────────────────────────────────────────────────────────
// Research
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResearchType {
    #[default]
    Current,
    Publication,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Research {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub owner_email: Option<String>,
    #[serde(rename = "type")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub research_type: ResearchType,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub title: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub description: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub authors: Vec<String>,
    pub date: Option<String>,
    pub journal: Option<String>,
    pub doi: Option<String>,
    pub link: Option<String>,
    pub status: Option<String>,
}

impl Resource for Research {
    const KIND: ResourceKind = ResourceKind::Research;

    record_identity!();

    fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)
    }
}
