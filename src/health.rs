use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::content::application::ports::outgoing::{ContentGateway, GatewayError, GatewayRequest};

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReadinessResponse {
    status: &'static str,
    content_api: &'static str,
}

/// Path probed for readiness; public and cheap.
const READINESS_PROBE_PATH: &str = "/api/profile";

/// LIVENESS PROBE
/// - No I/O
#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Process is up")))]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Content API answers HTTP (any status)
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Content API reachable"),
        (status = 503, description = "Content API unreachable"),
    )
)]
#[get("/ready")]
pub async fn readiness(gateway: web::Data<Arc<dyn ContentGateway>>) -> impl Responder {
    let content_api = match gateway.send(GatewayRequest::get(READINESS_PROBE_PATH)).await {
        Ok(_) | Err(GatewayError::Rejected { .. }) | Err(GatewayError::InvalidPayload(_)) => "ok",
        Err(GatewayError::Unavailable(e)) => {
            warn!(error = %e, "Readiness probe could not reach content API");
            "unreachable"
        }
    };

    if content_api == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            content_api,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            content_api,
        })
    }
}
