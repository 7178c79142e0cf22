use actix_web::{get, web, Responder};

use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public home page
///
/// Profile hero plus a two-card preview of every section. Sections the
/// content API could not serve are left out.
#[utoipa::path(
    get,
    path = "/api/site/home",
    tag = "site",
    responses(
        (status = 200, description = "Home page view; unavailable sections are null"),
    )
)]
#[get("/api/site/home")]
pub async fn get_home_page_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.home_page_use_case.execute().await)
}
