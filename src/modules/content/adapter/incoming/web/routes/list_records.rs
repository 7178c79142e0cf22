use actix_web::{web, HttpResponse};
use tracing::error;

use crate::auth::application::domain::entities::AdminSession;
use crate::content::application::content_use_cases::SelectUseCases;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// `GET /api/dashboard/{slug}`: the full list, in content API order.
pub async fn list_records_handler<R: SelectUseCases>(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> HttpResponse {
    match R::select(&data.content).list.execute().await {
        Ok(records) => ApiResponse::success(records),
        Err(e) => {
            error!(resource = %R::KIND, error = %e, "Listing records failed");
            ApiResponse::bad_gateway(
                "FETCH_FAILED",
                &format!("Failed to fetch {}", R::KIND.display_name().to_lowercase()),
            )
        }
    }
}
