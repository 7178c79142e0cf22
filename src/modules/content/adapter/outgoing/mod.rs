pub mod content_api_config;
pub mod content_gateway_http;

pub use content_api_config::{ContentApiConfig, ContentApiConfigError};
pub use content_gateway_http::ContentGatewayHttp;
