//! Prometheus output of the request metrics.
//!
//! Kept in its own test binary: it installs the process-wide recorder.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use lab_services::api::{create_router, AppState};
use lab_services::{metrics, Service};

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn request_metrics_are_labelled_by_route_template() {
    let handle = metrics::install_recorder().unwrap();
    let app = create_router(AppState::new(Service::All).with_metrics(handle));

    assert_eq!(get(&app, "/greet/Bob").await.0, StatusCode::OK);
    assert_eq!(get(&app, "/greet/Ann").await.0, StatusCode::OK);
    assert_eq!(get(&app, "/nope").await.0, StatusCode::NOT_FOUND);

    let (status, exposition) = get(&app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);

    assert!(
        exposition.contains(r#"http_requests_total{method="GET",path="/greet/:name",status="200"} 2"#),
        "missing templated counter:\n{}",
        exposition
    );
    assert!(
        exposition.contains(r#"http_requests_total{method="GET",path="unmatched",status="404"} 1"#),
        "missing unmatched counter:\n{}",
        exposition
    );
    assert!(!exposition.contains(r#"path="/greet/Bob""#));
    assert!(!exposition.contains(r#"path="/greet/Ann""#));
    assert!(!exposition.contains(r#"path="/nope""#));
}
