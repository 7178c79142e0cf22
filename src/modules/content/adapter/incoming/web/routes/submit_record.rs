use actix_web::{http::StatusCode, web, HttpResponse};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::AdminSession;
use crate::content::application::content_use_cases::SelectUseCases;
use crate::content::application::ports::incoming::use_cases::{
    SubmitRecordCommand, SubmitRecordError,
};
use crate::content::application::ports::outgoing::FilePart;
use crate::content::domain::ValidationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// One file picked in the dashboard form, base64 encoded by the browser.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadDto {
    pub field: String,
    pub file_name: String,
    #[serde(default = "default_content_type")]
    pub content_type: String,
    pub data: String,
}

fn default_content_type() -> String {
    "application/octet-stream".to_string()
}

impl TryFrom<UploadDto> for FilePart {
    type Error = ValidationError;

    fn try_from(dto: UploadDto) -> Result<Self, Self::Error> {
        // Browsers hand out data URLs; keep only the payload.
        let payload = match dto.data.split_once(";base64,") {
            Some((_, encoded)) => encoded,
            None => dto.data.as_str(),
        };
        let bytes = STANDARD
            .decode(payload.trim())
            .map_err(|e| ValidationError::InvalidUpload(dto.field.clone(), e.to_string()))?;
        if dto.file_name.trim().is_empty() {
            return Err(ValidationError::InvalidUpload(
                dto.field,
                "file name is required".to_string(),
            ));
        }

        Ok(FilePart {
            field: dto.field,
            file_name: dto.file_name,
            content_type: dto.content_type,
            bytes,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmitRecordRequest<R> {
    pub record: R,
    #[serde(default)]
    pub uploads: Vec<UploadDto>,
}

impl<R> SubmitRecordRequest<R> {
    fn into_command(self) -> Result<SubmitRecordCommand<R>, ValidationError> {
        let uploads = self
            .uploads
            .into_iter()
            .map(FilePart::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SubmitRecordCommand {
            record: self.record,
            uploads,
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

async fn submit<R: SelectUseCases>(
    session: AdminSession,
    command: Result<SubmitRecordCommand<R>, ValidationError>,
    success_status: StatusCode,
    data: web::Data<AppState>,
) -> HttpResponse {
    let command = match command {
        Ok(c) => c,
        Err(e) => return submit_error_response::<R>(e.into()),
    };

    match R::select(&data.content)
        .submit
        .execute(&session, command)
        .await
    {
        Ok(outcome) => {
            info!(resource = %R::KIND, "Record saved from dashboard");
            ApiResponse::with_status(success_status, outcome)
        }
        Err(e) => submit_error_response::<R>(e),
    }
}

fn submit_error_response<R: SelectUseCases>(err: SubmitRecordError) -> HttpResponse {
    match err {
        SubmitRecordError::Validation(e) => {
            warn!(resource = %R::KIND, error = %e, "Record failed validation");
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        SubmitRecordError::Rejected { status, message } => {
            ApiResponse::upstream_rejection(status, "SUBMISSION_FAILED", &message)
        }
        SubmitRecordError::Unavailable(e) => {
            error!(resource = %R::KIND, error = %e, "Content API unavailable on save");
            ApiResponse::bad_gateway("UPSTREAM_UNAVAILABLE", "Content service is unavailable")
        }
    }
}

/// `POST /api/dashboard/{slug}`: create; any id in the body is ignored.
pub async fn create_record_handler<R: SelectUseCases>(
    session: AdminSession,
    req: web::Json<SubmitRecordRequest<R>>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let command = req.into_inner().into_command().map(|mut c| {
        c.record.set_id(None);
        c
    });
    submit::<R>(session, command, StatusCode::CREATED, data).await
}

/// `PUT /api/dashboard/{slug}/{id}`: update; the path id wins over the body.
pub async fn update_record_handler<R: SelectUseCases>(
    session: AdminSession,
    path: web::Path<String>,
    req: web::Json<SubmitRecordRequest<R>>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = path.into_inner();
    let command = req.into_inner().into_command().map(|mut c| {
        c.record.set_id(Some(id));
        c
    });
    submit::<R>(session, command, StatusCode::OK, data).await
}
