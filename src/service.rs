//! Service selection.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Which service(s) this process hosts.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Service {
    /// Mock account balance endpoint.
    Banking,
    /// Hello, greet and info endpoints.
    Greeting,
    /// Both services on one listener.
    #[default]
    All,
}

impl Service {
    /// Whether the banking routes are mounted.
    pub fn hosts_banking(self) -> bool {
        matches!(self, Self::Banking | Self::All)
    }

    /// Whether the greeting routes are mounted.
    pub fn hosts_greeting(self) -> bool {
        matches!(self, Self::Greeting | Self::All)
    }

    /// Functional route templates served, in OpenAPI path syntax.
    pub fn routes(self) -> Vec<&'static str> {
        let mut routes = Vec::new();
        if self.hosts_banking() {
            routes.push("/balance");
        }
        if self.hosts_greeting() {
            routes.extend(["/hello", "/greet/{name}", "/info"]);
        }
        routes
    }
}
