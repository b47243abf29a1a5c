//! OpenAPI document for the functional routes.

use axum::{extract::State, Json};
use utoipa::OpenApi;

use super::greeting::InfoResponse;
use super::handlers::AppState;
use crate::service::Service;

/// OpenAPI description of every functional route.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "lab-services",
        version = "1.0.0",
        description = "Banking and greeting REST microservices"
    ),
    paths(
        crate::api::banking::balance,
        crate::api::greeting::hello,
        crate::api::greeting::greet,
        crate::api::greeting::info
    ),
    components(schemas(InfoResponse)),
    tags(
        (name = "banking", description = "Mock account balance"),
        (name = "greeting", description = "Greetings and service info")
    )
)]
pub struct ApiDoc;

/// OpenAPI document restricted to the routes a service mounts.
pub fn openapi_for(service: Service) -> utoipa::openapi::OpenApi {
    let mounted = service.routes();
    let mut doc = ApiDoc::openapi();
    doc.paths
        .paths
        .retain(|path, _| mounted.contains(&path.as_str()));
    doc
}

/// OpenAPI JSON handler.
pub async fn openapi_json(State(state): State<AppState>) -> Json<utoipa::openapi::OpenApi> {
    Json(openapi_for(state.service))
}
