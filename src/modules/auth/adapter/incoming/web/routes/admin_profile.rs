use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::{
    AdminProfile, AdminProfileUpdate, AdminSession,
};
use crate::auth::application::use_cases::fetch_admin_profile::AdminProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdminProfileRequest {
    #[schema(example = "admin")]
    pub username: Option<String>,
    #[schema(example = "admin@example.com")]
    pub email: Option<String>,
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    /// New password; omit to keep the current one
    pub password: Option<String>,
}

fn profile_error_response(err: AdminProfileError) -> HttpResponse {
    match err {
        AdminProfileError::Unauthorized => {
            ApiResponse::unauthorized("UNAUTHORIZED", "Session expired, please log in again")
        }
        AdminProfileError::Validation(e) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        AdminProfileError::Rejected { status, message } => {
            ApiResponse::upstream_rejection(status, "PROFILE_UPDATE_FAILED", &message)
        }
        AdminProfileError::Upstream(e) => {
            error!(error = %e, "Content API unavailable for admin profile");
            ApiResponse::bad_gateway("UPSTREAM_UNAVAILABLE", "Content service is unavailable")
        }
    }
}

/// Get the admin account profile
#[utoipa::path(
    get,
    path = "/api/dashboard/admin/profile",
    tag = "admin",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Admin profile", body = inline(SuccessResponse<AdminProfile>)),
        (status = 401, description = "Missing or rejected token", body = ErrorResponse),
        (status = 502, description = "Content API unavailable", body = ErrorResponse),
    )
)]
#[get("/api/dashboard/admin/profile")]
pub async fn fetch_admin_profile_handler(
    session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_admin_profile_use_case.execute(&session).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => profile_error_response(e),
    }
}

/// Update the admin account profile
#[utoipa::path(
    put,
    path = "/api/dashboard/admin/profile",
    tag = "admin",
    security(("BearerAuth" = [])),
    request_body = UpdateAdminProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = inline(SuccessResponse<AdminProfile>)),
        (status = 400, description = "Invalid update", body = ErrorResponse),
        (status = 401, description = "Missing or rejected token", body = ErrorResponse),
        (status = 409, description = "Rejected by the content API", body = ErrorResponse),
        (status = 502, description = "Content API unavailable", body = ErrorResponse),
    )
)]
#[put("/api/dashboard/admin/profile")]
pub async fn update_admin_profile_handler(
    session: AdminSession,
    req: web::Json<UpdateAdminProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let update = match AdminProfileUpdate::new(req.username, req.email, req.name, req.password) {
        Ok(update) => update,
        Err(e) => return profile_error_response(e.into()),
    };

    match data
        .update_admin_profile_use_case
        .execute(&session, update)
        .await
    {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => profile_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::use_cases::fetch_admin_profile::IFetchAdminProfileUseCase;
    use crate::auth::application::use_cases::update_admin_profile::IUpdateAdminProfileUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    struct MockFetchAdminProfile {
        result: Result<AdminProfile, AdminProfileError>,
    }

    #[async_trait]
    impl IFetchAdminProfileUseCase for MockFetchAdminProfile {
        async fn execute(
            &self,
            _session: &AdminSession,
        ) -> Result<AdminProfile, AdminProfileError> {
            self.result.clone()
        }
    }

    #[derive(Default)]
    struct MockUpdateAdminProfile {
        seen: Arc<Mutex<Vec<(String, AdminProfileUpdate)>>>,
    }

    #[async_trait]
    impl IUpdateAdminProfileUseCase for MockUpdateAdminProfile {
        async fn execute(
            &self,
            session: &AdminSession,
            update: AdminProfileUpdate,
        ) -> Result<AdminProfile, AdminProfileError> {
            self.seen
                .lock()
                .unwrap()
                .push((session.token.clone(), update.clone()));
            Ok(AdminProfile {
                username: "admin".to_string(),
                email: update.email.unwrap_or_default(),
                ..AdminProfile::default()
            })
        }
    }

    fn admin() -> AdminProfile {
        AdminProfile {
            id: Some("a1".to_string()),
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            name: "Jane".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_fetch_profile_success() {
        let app_state = TestAppStateBuilder::default()
            .with_fetch_admin_profile(MockFetchAdminProfile { result: Ok(admin()) })
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(fetch_admin_profile_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/dashboard/admin/profile")
            .insert_header(("Authorization", "Bearer tok"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["_id"], "a1");
        assert_eq!(body["data"]["email"], "admin@example.com");
    }

    #[actix_web::test]
    async fn test_fetch_profile_requires_token() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(fetch_admin_profile_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/dashboard/admin/profile")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "MISSING_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn test_fetch_profile_expired_session() {
        let app_state = TestAppStateBuilder::default()
            .with_fetch_admin_profile(MockFetchAdminProfile {
                result: Err(AdminProfileError::Unauthorized),
            })
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(fetch_admin_profile_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/dashboard/admin/profile")
            .insert_header(("Authorization", "Bearer old"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    }

    #[actix_web::test]
    async fn test_update_profile_forwards_validated_update() {
        let mock = MockUpdateAdminProfile::default();
        let seen = mock.seen.clone();
        let app_state = TestAppStateBuilder::default()
            .with_update_admin_profile(mock)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(update_admin_profile_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/dashboard/admin/profile")
            .insert_header(("Authorization", "Bearer tok"))
            .set_json(serde_json::json!({ "email": "new@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["email"], "new@example.com");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "tok");
        assert_eq!(seen[0].1.email.as_deref(), Some("new@example.com"));
    }

    #[actix_web::test]
    async fn test_update_profile_invalid_email_never_reaches_use_case() {
        let mock = MockUpdateAdminProfile::default();
        let seen = mock.seen.clone();
        let app_state = TestAppStateBuilder::default()
            .with_update_admin_profile(mock)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(update_admin_profile_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/dashboard/admin/profile")
            .insert_header(("Authorization", "Bearer tok"))
            .set_json(serde_json::json!({ "email": "broken" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        assert!(seen.lock().unwrap().is_empty());
    }
}
