use crate::auth::application::domain::entities::AdminSession;
use crate::content::domain::Award;

pub fn session() -> AdminSession {
    AdminSession::new("test-token", Some("admin@example.com".to_string()))
}

pub fn award(id: &str) -> Award {
    Award {
        id: Some(id.to_string()),
        title: format!("Award {id}"),
        issuer: "IEEE".to_string(),
        ..Award::default()
    }
}
