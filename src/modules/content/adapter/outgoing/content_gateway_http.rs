use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::{debug, warn};

use super::content_api_config::ContentApiConfig;
use crate::modules::content::application::ports::outgoing::{
    ContentGateway, GatewayError, GatewayRequest, GatewayResponse, HttpMethod, MultipartBody,
    RequestBody,
};

const ADMIN_PATH_PREFIX: &str = "/api/admin";

/// reqwest-backed client for the portfolio content API.
#[derive(Clone)]
pub struct ContentGatewayHttp {
    client: Client,
    base_url: String,
    admin_base_url: String,
}

impl ContentGatewayHttp {
    pub fn new(client: Client, base_url: impl Into<String>, admin_base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            admin_base_url: admin_base_url.into(),
        }
    }

    pub fn from_config(config: &ContentApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self::new(
            client,
            config.base_url.clone(),
            config.admin_base_url.clone(),
        ))
    }

    fn url_for(&self, path: &str) -> String {
        let base = if path.starts_with(ADMIN_PATH_PREFIX) {
            &self.admin_base_url
        } else {
            &self.base_url
        };
        format!("{}{}", base, path)
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn build_form(body: MultipartBody) -> Result<Form, GatewayError> {
    let mut form = Form::new();
    for (name, value) in body.fields {
        form = form.text(name, value);
    }
    for file in body.files {
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.content_type)
            .map_err(|e| GatewayError::Unavailable(format!("invalid content type: {}", e)))?;
        form = form.part(file.field, part);
    }
    Ok(form)
}

/// Empty bodies become `Null`; bodies that are not JSON are kept as a string.
fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Longest plain-text error body shown to the user as is.
const PLAIN_MESSAGE_MAX_CHARS: usize = 200;

/// Plain-text bodies only count when short and free of markup, so a
/// proxy's HTML error page never reaches the alert banner.
fn plain_message(text: &str) -> Option<&str> {
    let text = text.trim();
    let looks_like_markup = text.contains('<') || text.contains('>');
    (!looks_like_markup && text.chars().count() <= PLAIN_MESSAGE_MAX_CHARS).then_some(text)
}

/// Pulls a human readable message out of an error body.
fn rejection_message(body: &Value) -> Option<String> {
    let message = match body {
        Value::Object(map) => map
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| map.get("error").and_then(Value::as_str))
            .or_else(|| {
                map.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(Value::as_str)
            }),
        Value::String(text) => plain_message(text),
        _ => None,
    };
    message
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl ContentGateway for ContentGatewayHttp {
    async fn send(&self, request: GatewayRequest) -> Result<GatewayResponse, GatewayError> {
        let GatewayRequest {
            method,
            path,
            bearer,
            body,
        } = request;
        let url = self.url_for(&path);

        let mut builder = self.client.request(to_reqwest_method(method), &url);
        if let Some(token) = bearer {
            builder = builder.bearer_auth(token);
        }
        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(multipart) => builder.multipart(build_form(multipart)?),
        };

        let response = builder.send().await.map_err(|e| {
            warn!(%method, %path, error = %e, "Content API request failed");
            GatewayError::Unavailable(e.to_string())
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Unavailable(format!("failed to read response: {}", e)))?;
        let body = parse_body(&text);

        debug!(%method, %path, status = status.as_u16(), "Content API responded");

        if !status.is_success() {
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                message: rejection_message(&body),
            });
        }

        Ok(GatewayResponse {
            status: status.as_u16(),
            body,
        })
    }
}
