use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{error, info};

use crate::auth::application::domain::entities::AdminSession;
use crate::content::application::content_use_cases::SelectUseCases;
use crate::content::application::ports::incoming::use_cases::{
    DeleteConfirmation, DeleteRecordError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    pub confirm: bool,
}

/// `DELETE /api/dashboard/{slug}/{id}?confirm=true`
pub async fn delete_record_handler<R: SelectUseCases>(
    session: AdminSession,
    path: web::Path<String>,
    query: web::Query<DeleteQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = path.into_inner();
    let confirmation = DeleteConfirmation::from(query.confirm);

    match R::select(&data.content)
        .delete
        .execute(&session, &id, confirmation)
        .await
    {
        Ok(outcome) => {
            info!(resource = %R::KIND, id = %id, "Record deleted from dashboard");
            ApiResponse::success(outcome)
        }
        Err(DeleteRecordError::NotConfirmed) => ApiResponse::bad_request(
            "CONFIRMATION_REQUIRED",
            &format!("Confirm to delete this {}", R::KIND.noun()),
        ),
        Err(DeleteRecordError::NotSupported) => ApiResponse::bad_request(
            "DELETE_NOT_SUPPORTED",
            &format!("The {} cannot be deleted", R::KIND.noun()),
        ),
        Err(DeleteRecordError::Rejected { status, message }) => {
            ApiResponse::upstream_rejection(status, "DELETE_FAILED", &message)
        }
        Err(DeleteRecordError::Unavailable(e)) => {
            error!(resource = %R::KIND, id = %id, error = %e, "Content API unavailable on delete");
            ApiResponse::bad_gateway("UPSTREAM_UNAVAILABLE", "Content service is unavailable")
        }
    }
}
