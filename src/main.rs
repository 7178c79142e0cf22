pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::content;
pub use modules::site;

use crate::auth::application::services::admin_profile::{
    FetchAdminProfileService, UpdateAdminProfileService,
};
use crate::auth::application::use_cases::{
    fetch_admin_profile::IFetchAdminProfileUseCase,
    login_admin::{ILoginAdminUseCase, LoginAdminUseCase},
    update_admin_profile::IUpdateAdminProfileUseCase,
};
use crate::config::AppConfig;
use crate::content::adapter::outgoing::ContentGatewayHttp;
use crate::content::application::content_use_cases::ContentUseCases;
use crate::content::application::ports::outgoing::ContentGateway;
use crate::site::application::ports::incoming::use_cases::{
    GetHomePageUseCase, GetSectionPageUseCase,
};
use crate::site::application::services::{GetHomePageService, GetSectionPageService};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub login_admin_use_case: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    pub fetch_admin_profile_use_case: Arc<dyn IFetchAdminProfileUseCase + Send + Sync>,
    pub update_admin_profile_use_case: Arc<dyn IUpdateAdminProfileUseCase + Send + Sync>,
    pub home_page_use_case: Arc<dyn GetHomePageUseCase + Send + Sync>,
    pub section_page_use_case: Arc<dyn GetSectionPageUseCase + Send + Sync>,
    pub content: ContentUseCases,
}

impl AppState {
    /// Wires every use case over one content gateway.
    pub fn over(gateway: Arc<dyn ContentGateway>) -> Self {
        let content = ContentUseCases::over(Arc::clone(&gateway));

        Self {
            login_admin_use_case: Arc::new(LoginAdminUseCase::new(Arc::clone(&gateway))),
            fetch_admin_profile_use_case: Arc::new(FetchAdminProfileService::new(Arc::clone(
                &gateway,
            ))),
            update_admin_profile_use_case: Arc::new(UpdateAdminProfileService::new(gateway)),
            home_page_use_case: Arc::new(GetHomePageService::new(content.clone())),
            section_page_use_case: Arc::new(GetSectionPageService::new(content.clone())),
            content,
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()?;
    let server_url = config.bind_address();

    let gateway: Arc<dyn ContentGateway> = Arc::new(
        ContentGatewayHttp::from_config(&config.content_api)
            .context("failed to build content API client")?,
    );

    info!(
        content_api = %config.content_api.base_url,
        admin_api = %config.content_api.admin_base_url,
        timeout_secs = config.content_api.request_timeout.as_secs(),
        "Content API configured"
    );

    let state = AppState::over(Arc::clone(&gateway));

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&gateway)))
            .app_data(crate::shared::api::custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(&server_url)
    .with_context(|| format!("failed to bind {}", server_url))?
    .run()
    .await
    .context("server error")
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::fetch_admin_profile_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_admin_profile_handler);
    // Site (home before the section catch-all)
    cfg.service(crate::site::adapter::incoming::web::routes::get_home_page_handler);
    cfg.service(crate::site::adapter::incoming::web::routes::get_section_page_handler);
    // Dashboard CRUD
    crate::content::adapter::incoming::routes::configure(cfg);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
