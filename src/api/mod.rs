//! HTTP API module: service endpoints plus health, readiness, metrics and docs.

pub mod banking;
pub mod docs;
pub mod greeting;
pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
