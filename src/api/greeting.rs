//! Greeting service: hello, personal greeting and service info.

use axum::{extract::Path, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `/hello`.
pub const HELLO_MESSAGE: &str = "Hello, Spring Boot Microservice!";
/// Version reported by `/info`.
pub const SERVICE_VERSION: &str = "1.0.0";
/// Description reported by `/info`.
pub const SERVICE_DESCRIPTION: &str = "My Spring Boot Microservice";

/// Service info response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InfoResponse {
    /// Service version.
    pub version: String,
    /// Human readable description.
    pub description: String,
}

impl Default for InfoResponse {
    fn default() -> Self {
        Self {
            version: SERVICE_VERSION.to_string(),
            description: SERVICE_DESCRIPTION.to_string(),
        }
    }
}

/// Greeting for a name. The name is inserted verbatim, no escaping.
pub fn greeting_for(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// Hello handler.
#[utoipa::path(
    get,
    path = "/hello",
    tag = "greeting",
    responses(
        (status = 200, description = "Static greeting", body = String, content_type = "text/plain")
    )
)]
pub async fn hello() -> &'static str {
    HELLO_MESSAGE
}

/// Greet handler - echoes the decoded path segment.
#[utoipa::path(
    get,
    path = "/greet/{name}",
    tag = "greeting",
    params(
        ("name" = String, Path, description = "Name to greet, may be empty")
    ),
    responses(
        (status = 200, description = "Personal greeting", body = String, content_type = "text/plain")
    )
)]
pub async fn greet(Path(name): Path<String>) -> String {
    greeting_for(&name)
}

/// `/greet/` with an empty name segment.
pub async fn greet_empty() -> String {
    greeting_for("")
}

/// Info handler.
#[utoipa::path(
    get,
    path = "/info",
    tag = "greeting",
    responses(
        (status = 200, description = "Service version and description", body = InfoResponse)
    )
)]
pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse::default())
}
