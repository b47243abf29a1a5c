//! Integration tests for the banking and greeting services.
//!
//! Drive the full router (tracing and metrics layers included) in-process.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use tower::ServiceExt;

use lab_services::api::{create_router, AppState};
use lab_services::Service;

fn app(service: Service) -> Router {
    create_router(AppState::new(service))
}

/// GET `uri` and return status, content type and body text.
async fn get(app: Router, uri: &str) -> (StatusCode, String, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn balance_returns_mock_sentence() {
    let (status, content_type, body) = get(app(Service::Banking), "/balance").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(body, "Your current balance is $5000.");
}

#[tokio::test]
async fn balance_is_stable_across_calls() {
    let router = app(Service::All);
    for _ in 0..3 {
        let (_, _, body) = get(router.clone(), "/balance").await;
        assert_eq!(body, "Your current balance is $5000.");
    }
}

#[tokio::test]
async fn hello_returns_static_greeting() {
    let (status, _, body) = get(app(Service::Greeting), "/hello").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello, Spring Boot Microservice!");
}

#[tokio::test]
async fn greet_echoes_name() {
    let (status, _, body) = get(app(Service::Greeting), "/greet/Alice").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello, Alice!");
}

#[tokio::test]
async fn greet_accepts_empty_name() {
    let (status, _, body) = get(app(Service::Greeting), "/greet/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello, !");
}

#[tokio::test]
async fn greet_decodes_without_escaping() {
    let router = app(Service::All);

    let (_, _, body) = get(router.clone(), "/greet/John%20Doe").await;
    assert_eq!(body, "Hello, John Doe!");

    let (_, _, body) = get(router.clone(), "/greet/%3Cscript%3E").await;
    assert_eq!(body, "Hello, <script>!");

    let (_, _, body) = get(router, "/greet/J%C3%BCrgen&co").await;
    assert_eq!(body, "Hello, Jürgen&co!");
}

#[tokio::test]
async fn info_returns_two_key_map() {
    let router = app(Service::Greeting);
    let (status, content_type, body) = get(router.clone(), "/info").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "application/json");

    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "version": "1.0.0",
            "description": "My Spring Boot Microservice"
        })
    );

    let (_, _, again) = get(router, "/info").await;
    assert_eq!(body, again);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (status, _, _) = get(app(Service::All), "/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn openapi_lists_mounted_routes() {
    let (status, _, body) = get(app(Service::Greeting), "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);

    let doc: serde_json::Value = serde_json::from_str(&body).unwrap();
    let paths = doc["paths"].as_object().unwrap();
    assert!(paths.contains_key("/greet/{name}"));
    assert!(paths.contains_key("/info"));
    assert!(!paths.contains_key("/balance"));
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, _, body) = get(app(Service::Banking), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"status":"ok"}"#);
}
