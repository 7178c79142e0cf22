use std::env;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentApiConfig {
    /// Base URL of the content API, without a trailing slash.
    pub base_url: String,
    /// Base URL for `/api/admin/*` calls; same as `base_url` unless overridden.
    pub admin_base_url: String,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentApiConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{0} must be an http(s) URL, got '{1}'")]
    InvalidUrl(&'static str, String),

    #[error("{0} must be a whole number of seconds, got '{1}'")]
    InvalidTimeout(&'static str, String),
}

impl ContentApiConfig {
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    pub fn from_env() -> Result<Self, ContentApiConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ContentApiConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("CONTENT_API_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ContentApiConfigError::Missing("CONTENT_API_BASE_URL"))?;
        let base_url = normalize_url("CONTENT_API_BASE_URL", &base_url)?;

        let admin_base_url = match lookup("ADMIN_API_BASE_URL").filter(|v| !v.trim().is_empty()) {
            Some(url) => normalize_url("ADMIN_API_BASE_URL", &url)?,
            None => base_url.clone(),
        };

        let request_timeout = match lookup("CONTENT_API_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ContentApiConfigError::InvalidTimeout("CONTENT_API_TIMEOUT_SECS", raw))?,
            None => Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            base_url,
            admin_base_url,
            request_timeout,
        })
    }
}

fn normalize_url(key: &'static str, raw: &str) -> Result<String, ContentApiConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(ContentApiConfigError::InvalidUrl(key, raw.to_string()))
    }
}
