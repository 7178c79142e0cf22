use actix_web::{get, web, Responder};

use crate::api::schemas::ErrorResponse;
use crate::shared::api::ApiResponse;
use crate::site::application::ports::incoming::use_cases::GetSectionPageError;
use crate::AppState;

/// Dedicated section page
///
/// Every record of one section, in content API order.
#[utoipa::path(
    get,
    path = "/api/site/{page_slug}",
    tag = "site",
    params(
        ("page_slug" = String, Path, description = "academics, experience, projects, skills, certifications, awards or research")
    ),
    responses(
        (status = 200, description = "Section page; `section` is null when there is nothing to show"),
        (
            status = 404,
            description = "No such section",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "SECTION_NOT_FOUND", "message": "No section page named 'blog'" }
            })
        ),
    )
)]
#[get("/api/site/{page_slug}")]
pub async fn get_section_page_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page_slug = path.into_inner();

    match data.section_page_use_case.execute(&page_slug).await {
        Ok(page) => ApiResponse::success(page),
        Err(e @ GetSectionPageError::NotFound(_)) => {
            ApiResponse::not_found("SECTION_NOT_FOUND", &e.to_string())
        }
    }
}
