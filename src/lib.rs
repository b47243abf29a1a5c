//! Banking and greeting REST microservices.
//!
//! Two small HTTP services that can run side by side or on their own:
//!
//! ```text
//! GET /balance        -> Your current balance is $5000.
//! GET /hello          -> Hello, Spring Boot Microservice!
//! GET /greet/{name}   -> Hello, {name}!
//! GET /info           -> {"version":"1.0.0","description":"My Spring Boot Microservice"}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`service`]: Which service(s) a process hosts
//! - [`api`]: HTTP router, handlers and OpenAPI document
//! - [`metrics`]: Prometheus request metrics
//! - [`server`]: Listener and serve loop
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod server;
pub mod service;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
pub use service::Service;
