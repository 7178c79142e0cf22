use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Credentials the dashboard forwards to the content API on every
/// authenticated call. The token is opaque here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub token: String,
    /// Email stored by the browser after login; prefills `ownerEmail`.
    pub owner_email: Option<String>,
}

impl AdminSession {
    pub fn new(token: impl Into<String>, owner_email: Option<String>) -> Self {
        Self {
            token: token.into(),
            owner_email,
        }
    }
}

// ========================= Credentials =========================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminCredentialsError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

/// Validated login credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    username: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(username: String, password: String) -> Result<Self, AdminCredentialsError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AdminCredentialsError::EmptyUsername);
        }
        // Passwords are sent as typed; only an all-blank one is refused.
        if password.trim().is_empty() {
            return Err(AdminCredentialsError::EmptyPassword);
        }

        Ok(Self {
            username: username.to_string(),
            password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub token: String,
    pub owner_email: Option<String>,
}

// ========================= Admin profile =========================

/// Account profile of the admin as the content API returns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AdminProfile {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub username: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminProfileUpdateError {
    #[error("Nothing to update")]
    Empty,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Username cannot be empty")]
    EmptyUsername,
}

/// Partial update of the admin account; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl AdminProfileUpdate {
    pub fn new(
        username: Option<String>,
        email: Option<String>,
        name: Option<String>,
        password: Option<String>,
    ) -> Result<Self, AdminProfileUpdateError> {
        let username = match username.map(|u| u.trim().to_string()) {
            Some(u) if u.is_empty() => return Err(AdminProfileUpdateError::EmptyUsername),
            other => other,
        };

        let email = match email.map(|e| e.trim().to_string()) {
            Some(e) if !EmailAddress::is_valid(&e) => {
                return Err(AdminProfileUpdateError::InvalidEmail)
            }
            other => other,
        };

        let password = password.filter(|p| !p.trim().is_empty());
        let name = name.map(|n| n.trim().to_string());

        if username.is_none() && email.is_none() && name.is_none() && password.is_none() {
            return Err(AdminProfileUpdateError::Empty);
        }

        Ok(Self {
            username,
            email,
            name,
            password,
        })
    }
}
