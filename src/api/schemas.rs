// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Envelope of every 2xx answer from the site and dashboard routes.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    /// Page view, form, saved record or refreshed list, depending on the route.
    pub data: T,
}

/// Envelope of every error answer. Rejections from the content API keep
/// their message so the dashboard can show it in its alert banner.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable code, e.g. `VALIDATION_ERROR`, `SUBMISSION_FAILED`, `UPSTREAM_UNAVAILABLE`.
    #[schema(example = "SUBMISSION_FAILED")]
    pub code: String,

    /// Text shown to the admin as is.
    #[schema(example = "Failed to save award")]
    pub message: String,
}
