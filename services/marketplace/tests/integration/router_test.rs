use std::time::Duration;

use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::DatabaseConnection;
use serde_json::json;
use uuid::Uuid;

use fitmarket_auth_types::identity::USER_ID_HEADER;
use fitmarket_marketplace::domain::types::Buckets;
use fitmarket_marketplace::infra::storage::SupabaseStorage;
use fitmarket_marketplace::router::build_router;
use fitmarket_marketplace::state::AppState;
use fitmarket_testing::auth::MockAuth;

/// Server over a connection that was never opened. Only routes that stop
/// before touching the database may be exercised here.
fn server() -> TestServer {
    let storage = SupabaseStorage::new("http://storage.invalid", "service-key".to_owned()).unwrap();
    let state = AppState {
        db: DatabaseConnection::Disconnected,
        storage,
        buckets: Buckets::default(),
        payment_delay: Duration::ZERO,
    };
    TestServer::new(build_router(state)).unwrap()
}

#[tokio::test]
async fn should_answer_liveness_without_identity() {
    server().get("/healthz").await.assert_status_ok();
}

#[tokio::test]
async fn should_report_unready_when_database_is_unreachable() {
    let response = server().get("/readyz").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn should_reject_requests_without_identity_header() {
    let server = server();
    for path in [
        "/users/@me",
        "/workouts",
        "/advice/form",
        "/purchases",
        "/dashboard",
        "/anatomy/images",
    ] {
        let response = server.get(path).await;
        assert_eq!(
            response.status_code(),
            StatusCode::UNAUTHORIZED,
            "{path} should require an identity"
        );
    }
}

#[tokio::test]
async fn should_reject_malformed_identity_header() {
    let response = server()
        .post("/purchases")
        .add_header(USER_ID_HEADER, "not-a-uuid")
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_attach_request_id_to_responses() {
    let response = server().get("/healthz").await;
    let request_id = response.header("x-request-id");
    assert!(request_id.to_str().unwrap().parse::<Uuid>().is_ok());
}

#[tokio::test]
async fn should_echo_caller_request_id() {
    let response = server()
        .get("/healthz")
        .add_header("x-request-id", "req-42")
        .await;
    assert_eq!(response.header("x-request-id"), "req-42");
}

#[tokio::test]
async fn should_reject_unknown_role_on_registration() {
    let (name, value) = MockAuth::random().header();
    let response = server()
        .post("/users")
        .add_header(name, value)
        .json(&json!({ "name": "Jamie", "role": "admin" }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn should_refuse_to_sell_advice() {
    let (name, value) = MockAuth::random().header();
    let response = server()
        .post("/purchases")
        .add_header(name, value)
        .json(&json!({ "content_type": "advice", "content_id": Uuid::now_v7() }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}
