//! End-to-end tests of the auth endpoints over mock-backed state

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App};
use serde_json::{json, Value};

use sf_api::routes;
use sf_api::state::AppState;
use sf_core::repositories::{MockBusinessRepository, MockUserRepository};
use sf_core::services::agent::{MockGenerationClient, ResponseCache};
use sf_core::services::auth::AuthServiceConfig;
use sf_core::services::token::TokenServiceConfig;
use sf_core::services::{AgentService, AuthService, MockNotificationService, TokenService};

type TestState =
    AppState<MockUserRepository, MockBusinessRepository, MockNotificationService, MockGenerationClient>;

fn build_state() -> web::Data<TestState> {
    let users = Arc::new(MockUserRepository::new());
    let businesses = Arc::new(MockBusinessRepository::new());
    let emails = Arc::new(MockNotificationService::new());
    let generator = Arc::new(MockGenerationClient::new("Mocked answer"));

    let token_service = Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: "integration-test-secret".to_string(),
        ..Default::default()
    }));
    let auth_service = Arc::new(AuthService::new(
        users,
        emails,
        token_service.clone(),
        AuthServiceConfig::default(),
    ));
    let agent_service = Arc::new(AgentService::new(
        businesses,
        generator,
        Arc::new(ResponseCache::new()),
    ));

    web::Data::new(AppState::new(auth_service, agent_service, token_service))
}

async fn build_app(
    state: web::Data<TestState>,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    let token_service = state.token_service.clone();
    test::init_service(App::new().app_data(state).configure(|cfg| {
        routes::configure::<
            MockUserRepository,
            MockBusinessRepository,
            MockNotificationService,
            MockGenerationClient,
        >(cfg, token_service)
    }))
    .await
}

fn register_body(email: &str) -> Value {
    json!({
        "email": email,
        "password": "hunter22pass",
        "first_name": "Alice",
        "last_name": "Smith",
    })
}

#[actix_web::test]
async fn test_register_then_login() {
    let app = build_app(build_state()).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(register_body("alice@example.com"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 201);

    // Duplicate registration conflicts
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(register_body("alice@example.com"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 409);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({"email": "alice@example.com", "password": "hunter22pass"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert!(body["data"]["access_token"].as_str().unwrap().contains('.'));
    assert!(body["data"]["refresh_token"].is_string());
}

#[actix_web::test]
async fn test_login_with_wrong_password_is_401() {
    let app = build_app(build_state()).await;

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(register_body("alice@example.com"))
            .to_request(),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({"email": "alice@example.com", "password": "wrong-password"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_invalid_register_payload_is_400() {
    let app = build_app(build_state()).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(json!({
                "email": "not-an-email",
                "password": "hunter22pass",
                "first_name": "Alice",
                "last_name": "Smith",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_forgot_password_is_success_shaped_for_unknown_email() {
    let app = build_app(build_state()).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/forgot-password")
            .set_json(json!({"email": "nobody@example.com"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
}

#[actix_web::test]
async fn test_refresh_and_validate_token() {
    let app = build_app(build_state()).await;

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(register_body("alice@example.com"))
            .to_request(),
    )
    .await;
    let login = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({"email": "alice@example.com", "password": "hunter22pass"}))
            .to_request(),
    )
    .await;
    let login_body: Value = test::read_body_json(login).await;
    let access = login_body["data"]["access_token"].as_str().unwrap().to_string();
    let refresh = login_body["data"]["refresh_token"].as_str().unwrap().to_string();

    // Refresh mints a fresh access token
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/refresh")
            .set_json(json!({"refresh_token": refresh}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    // The access token validates; garbage does not
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/validate-token")
            .set_json(json!({"token": access}))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["valid"], json!(true));
    assert_eq!(body["data"]["email"], json!("alice@example.com"));

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/validate-token")
            .set_json(json!({"token": "garbage"}))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["valid"], json!(false));
}

#[actix_web::test]
async fn test_protected_routes_require_bearer_token() {
    let app = build_app(build_state()).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/auth/profile").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 401);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/auth/profile")
            .insert_header(("Authorization", "Bearer invalid-token"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_change_password_and_profile_behind_jwt() {
    let app = build_app(build_state()).await;

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(register_body("alice@example.com"))
            .to_request(),
    )
    .await;
    let login = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({"email": "alice@example.com", "password": "hunter22pass"}))
            .to_request(),
    )
    .await;
    let login_body: Value = test::read_body_json(login).await;
    let access = login_body["data"]["access_token"].as_str().unwrap().to_string();
    let bearer = format!("Bearer {}", access);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/auth/profile")
            .insert_header(("Authorization", bearer.clone()))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["email"], json!("alice@example.com"));

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/change-password")
            .insert_header(("Authorization", bearer))
            .set_json(json!({
                "current_password": "hunter22pass",
                "new_password": "evenlongerpass",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    // Old password no longer works
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({"email": "alice@example.com", "password": "hunter22pass"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 401);

    // The pre-change access token still validates until its own expiry
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/validate-token")
            .set_json(json!({"token": access}))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["valid"], json!(true));
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = build_app(build_state()).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), 200);
}
