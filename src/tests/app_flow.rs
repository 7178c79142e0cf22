//! Full router over the real HTTP gateway, with the content API mocked.

use actix_web::{test, web, App};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::content::adapter::outgoing::ContentGatewayHttp;
use crate::content::application::ports::outgoing::ContentGateway;
use crate::{init_routes, AppState};

fn gateway_for(server: &MockServer) -> Arc<dyn ContentGateway> {
    Arc::new(ContentGatewayHttp::new(
        reqwest::Client::new(),
        server.uri(),
        server.uri(),
    ))
}

macro_rules! full_app {
    ($gateway:expr) => {{
        let gateway: Arc<dyn ContentGateway> = $gateway;
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::over(Arc::clone(&gateway))))
                .app_data(web::Data::new(gateway))
                .app_data(crate::shared::api::custom_json_config())
                .configure(init_routes),
        )
        .await
    }};
}

#[actix_web::test]
async fn test_login_then_create_award_refreshes_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "tok-1",
            "email": "owner@example.com"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/award"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "_id": "a1", "title": "Best Paper", "issuer": "ACM"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/award"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "_id": "a1", "title": "Best Paper", "issuer": "ACM" }
        ])))
        .mount(&server)
        .await;

    let app = full_app!(gateway_for(&server));

    let req = test::TestRequest::post()
        .uri("/api/dashboard/login")
        .set_json(json!({ "username": "admin", "password": "pw" }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["token"], "tok-1");

    let req = test::TestRequest::post()
        .uri("/api/dashboard/award")
        .insert_header(("Authorization", "Bearer tok-1"))
        .insert_header(("X-Owner-Email", "owner@example.com"))
        .set_json(json!({ "record": { "title": "Best Paper", "issuer": "ACM" } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["saved"]["_id"], "a1");
    assert_eq!(body["data"]["records"][0]["title"], "Best Paper");

    let requests = server.received_requests().await.unwrap_or_default();
    let create = requests
        .iter()
        .find(|r| r.method.as_str() == "POST" && r.url.path() == "/api/award")
        .map(|r| serde_json::from_slice::<serde_json::Value>(&r.body).unwrap());
    assert_eq!(
        create.map(|b| b["ownerEmail"].clone()),
        Some(json!("owner@example.com"))
    );
}

#[actix_web::test]
async fn test_home_page_survives_content_api_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/skill"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "_id": "s1", "name": "Rust", "category": "Languages" }
        ])))
        .mount(&server)
        .await;
    // Unmatched paths get wiremock's default 404.
    let app = full_app!(gateway_for(&server));

    let req = test::TestRequest::get().uri("/api/site/home").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["data"]["profileError"].is_string());
    assert!(body["data"]["skills"]["cards"].is_array());
    assert!(body["data"].get("awards").map_or(true, |v| v.is_null()));
}

#[actix_web::test]
async fn test_dashboard_without_token_is_rejected_before_upstream() {
    let server = MockServer::start().await;
    let app = full_app!(gateway_for(&server));

    let req = test::TestRequest::get().uri("/api/dashboard/award").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    assert!(server
        .received_requests()
        .await
        .unwrap_or_default()
        .is_empty());
}
