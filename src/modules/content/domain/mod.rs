pub mod entities;
pub mod presentation;
pub mod resource;

pub use entities::{
    Academic, Award, Certification, Experience, Profile, Project, Research, ResearchType, Skill,
    SocialLinks,
};
pub use resource::{Resource, ResourceKind, ValidationError};
