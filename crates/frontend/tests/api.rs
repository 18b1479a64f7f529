mod common;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
    response::Response,
};
use common::FakeBackend;
use frontend::handler::AppRouter;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

fn app(backend: Arc<FakeBackend>, expose_config_endpoint: bool) -> Router {
    AppRouter::build(Arc::new(common::app_state(backend, expose_config_endpoint)))
}

async fn send(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

#[tokio::test]
async fn product_array_is_relayed_verbatim() {
    let raw = r#"[{"id":1}]"#;

    let response = send(app(FakeBackend::serving(raw), false), "/api/products").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    assert_eq!(body_bytes(response).await, raw.as_bytes());
}

#[tokio::test]
async fn object_payload_is_rejected() {
    let response = send(
        app(FakeBackend::serving(r#"{"foo":1}"#), false),
        "/api/products",
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({
            "error": "Backend response format error",
            "received": "object",
            "data": { "foo": 1 },
            "rawData": "{\"foo\":1}"
        })
    );
}

#[tokio::test]
async fn unparseable_payload_is_rejected() {
    let response = send(
        app(FakeBackend::serving("Internal Server Error"), false),
        "/api/products",
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Error parsing backend response");
    assert_eq!(body["rawData"], "Internal Server Error");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn unreachable_backend_names_the_url() {
    let response = send(app(FakeBackend::unreachable(), false), "/api/products").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({
            "error": "Error connecting to backend service",
            "message": "connect ECONNREFUSED",
            "backendUrl": "http://ecommerce-backend:8080/api/products"
        })
    );
}

#[tokio::test]
async fn debug_backend_relays_health() {
    let response = send(app(FakeBackend::serving("[]"), false), "/debug/backend").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "status": "Backend connection successful",
            "statusCode": 200,
            "headers": { "content-type": "application/json" },
            "data": "{\"status\":\"ok\"}"
        })
    );
}

#[tokio::test]
async fn debug_backend_reports_connection_failure() {
    let response = send(app(FakeBackend::unreachable(), false), "/debug/backend").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({
            "status": "Backend connection failed",
            "error": "connect ECONNREFUSED",
            "healthUrl": "http://ecommerce-backend:8080/api/health"
        })
    );
}

#[tokio::test]
async fn config_is_hidden_by_default() {
    let response = send(app(FakeBackend::serving("[]"), false), "/config").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn config_is_served_when_enabled() {
    let response = send(app(FakeBackend::serving("[]"), true), "/config").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["backendUrl"], "http://ecommerce-backend:8080");
    assert!(body["environment"].is_object());
}

#[tokio::test]
async fn static_index_is_served() {
    let response = send(app(FakeBackend::serving("[]"), false), "/").await;

    assert_eq!(response.status(), StatusCode::OK);

    let html = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(html.contains("E-Commerce Store"));
}

#[tokio::test]
async fn unknown_static_path_is_404() {
    let response = send(app(FakeBackend::serving("[]"), false), "/missing.css").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn metrics_are_exposed() {
    let response = send(app(FakeBackend::serving("[]"), false), "/metrics").await;

    assert_eq!(response.status(), StatusCode::OK);

    let text = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(text.contains("process_start_time_seconds"));
}
