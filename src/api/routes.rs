//! HTTP API route definitions.

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, Response},
    middleware,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::{info, Span};

use super::banking::balance;
use super::docs::openapi_json;
use super::greeting::{greet, greet_empty, hello, info};
use super::handlers::{health, metrics, ready, AppState};
use crate::metrics::track_http;

/// Create the API router for the service selected in `state`.
pub fn create_router(state: AppState) -> Router {
    let service = state.service;

    let mut router = Router::new()
        // Health endpoints
        .route("/health", get(health))
        .route("/ready", get(ready))
        // Observability
        .route("/metrics", get(metrics))
        .route("/api-docs/openapi.json", get(openapi_json));

    if service.hosts_banking() {
        router = router.merge(banking_routes());
    }
    if service.hosts_greeting() {
        router = router.merge(greeting_routes());
    }

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    router
        .layer(middleware::from_fn(track_http))
        .layer(trace_layer)
        .with_state(state)
}

/// Banking service routes.
pub fn banking_routes() -> Router<AppState> {
    Router::new().route("/balance", get(balance))
}

/// Greeting service routes.
pub fn greeting_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello))
        .route("/greet/", get(greet_empty))
        .route("/greet/:name", get(greet))
        .route("/info", get(info))
}
