use actix_web::{web, HttpResponse};
use tracing::error;

use crate::auth::application::domain::entities::AdminSession;
use crate::content::application::content_use_cases::SelectUseCases;
use crate::content::application::ports::incoming::use_cases::PrepareFormError;
use crate::shared::api::ApiResponse;
use crate::AppState;

async fn prepare_form<R: SelectUseCases>(
    session: AdminSession,
    id: Option<String>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match R::select(&data.content)
        .prepare_form
        .execute(&session, id)
        .await
    {
        Ok(form) => ApiResponse::success(form),
        Err(PrepareFormError::NotFound) => ApiResponse::not_found(
            "RECORD_NOT_FOUND",
            &format!("{} not found", capitalize(R::KIND.noun())),
        ),
        Err(PrepareFormError::FetchFailed(e)) => {
            error!(resource = %R::KIND, error = %e, "Loading record for edit failed");
            ApiResponse::bad_gateway("FETCH_FAILED", &format!("Failed to load {}", R::KIND.noun()))
        }
    }
}

/// `GET /api/dashboard/{slug}/form`: blank create form.
pub async fn new_record_form_handler<R: SelectUseCases>(
    session: AdminSession,
    data: web::Data<AppState>,
) -> HttpResponse {
    prepare_form::<R>(session, None, data).await
}

/// `GET /api/dashboard/{slug}/{id}/form`: edit form filled from the stored record.
pub async fn edit_record_form_handler<R: SelectUseCases>(
    session: AdminSession,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> HttpResponse {
    prepare_form::<R>(session, Some(path.into_inner()), data).await
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    use crate::content::application::ports::incoming::use_cases::{FormMode, RecordForm};
    use crate::content::domain::Award;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::award;
    use crate::tests::support::stubs::StubPrepareForm;

    macro_rules! form_app {
        ($stub:expr) => {{
            let app_state = TestAppStateBuilder::default().with_award_form($stub).build();
            test::init_service(
                App::new()
                    .app_data(app_state)
                    .route(
                        "/api/dashboard/award/form",
                        web::get().to(new_record_form_handler::<Award>),
                    )
                    .route(
                        "/api/dashboard/award/{id}/form",
                        web::get().to(edit_record_form_handler::<Award>),
                    ),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_create_form_passes_no_id() {
        let stub = StubPrepareForm::returning(RecordForm {
            mode: FormMode::Create,
            record: Award::default(),
        });
        let seen = stub.seen_ids();
        let app = form_app!(stub);

        let req = test::TestRequest::get()
            .uri("/api/dashboard/award/form")
            .insert_header(("Authorization", "Bearer tok"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["mode"], "create");
        assert_eq!(seen.lock().unwrap().as_slice(), &[None]);
    }

    #[actix_web::test]
    async fn test_edit_form_passes_path_id() {
        let stub = StubPrepareForm::returning(RecordForm {
            mode: FormMode::Edit,
            record: award("7"),
        });
        let seen = stub.seen_ids();
        let app = form_app!(stub);

        let req = test::TestRequest::get()
            .uri("/api/dashboard/award/7/form")
            .insert_header(("Authorization", "Bearer tok"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["mode"], "edit");
        assert_eq!(body["data"]["record"]["_id"], "7");
        assert_eq!(seen.lock().unwrap().as_slice(), &[Some("7".to_string())]);
    }

    #[actix_web::test]
    async fn test_edit_form_unknown_id_is_not_found() {
        let app = form_app!(StubPrepareForm::failing(PrepareFormError::NotFound));

        let req = test::TestRequest::get()
            .uri("/api/dashboard/award/404/form")
            .insert_header(("Authorization", "Bearer tok"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "RECORD_NOT_FOUND");
        assert_eq!(body["error"]["message"], "Award not found");
    }

    #[::core::prelude::v1::test]
    fn test_capitalize() {
        assert_eq!(capitalize("academic record"), "Academic record");
        assert_eq!(capitalize(""), "");
    }
}
