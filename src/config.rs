//! Application configuration loaded from environment variables.

use std::net::SocketAddr;

use serde::Deserialize;

use crate::error::{Result, ServiceError};
use crate::service::Service;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// HTTP listen port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// HTTP listen address (IP literal).
    #[serde(default = "default_host")]
    pub host: String,

    /// Which service(s) to host.
    #[serde(default)]
    pub service: Service,

    // === Observability ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,

    /// Log output format: `text` or `json`.
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Install the Prometheus recorder and expose `/metrics`.
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,
}

fn default_port() -> u16 {
    8080
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            service: Service::default(),
            rust_log: default_log_level(),
            verbose: false,
            log_format: default_log_format(),
            metrics_enabled: true,
        }
    }
}

/// Command-line values that take precedence over the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--port`.
    pub port: Option<u16>,
    /// `--host`.
    pub host: Option<String>,
    /// `--service`.
    pub service: Option<Service>,
    /// `--verbose`; only ever turns verbose on.
    pub verbose: bool,
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(service) = overrides.service {
            self.service = service;
        }
        self.verbose |= overrides.verbose;
    }

    /// Tracing filter directive for this configuration.
    pub fn log_filter(&self) -> String {
        if self.verbose {
            "lab_services=debug,info".to_string()
        } else {
            self.rust_log.clone()
        }
    }

    /// Whether logs are emitted as JSON lines.
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(ServiceError::InvalidConfig(
                "PORT must be between 1 and 65535".to_string(),
            ));
        }

        self.socket_addr()?;
        Ok(())
    }

    /// Address the HTTP listener binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip = self.host.parse().map_err(|_| {
            ServiceError::InvalidConfig(format!("HOST must be an IP address, got {:?}", self.host))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
