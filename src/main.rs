//! Banking and greeting microservices entry point.

use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lab_services::api::AppState;
use lab_services::config::{Config, Overrides};
use lab_services::metrics;
use lab_services::server;
use lab_services::service::Service;

/// Banking and greeting REST microservices.
#[derive(Parser, Debug)]
#[command(name = "lab-services")]
#[command(about = "Serve the banking and greeting REST endpoints")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// HTTP listen port (overrides PORT).
    #[arg(short, long, global = true)]
    port: Option<u16>,

    /// HTTP listen address (overrides HOST).
    #[arg(long, global = true)]
    host: Option<String>,

    /// Service(s) to host (overrides SERVICE).
    #[arg(short, long, global = true, value_enum)]
    service: Option<Service>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve,

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration (.env, then environment, then CLI overrides)
    let loaded = load_config(&args);

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(loaded),
        Some(Command::Serve) | None => {
            let config = loaded?;
            init_logging(&config);
            cmd_serve(config).await
        }
    }
}

/// Install the tracing subscriber. `LOG_FORMAT=json` switches to JSON lines.
fn init_logging(config: &Config) {
    let filter = EnvFilter::try_new(config.log_filter()).unwrap_or_else(|_| EnvFilter::new("info"));
    let json = config.json_logs();

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json()))
        .with((!json).then(fmt::layer))
        .init();
}

/// Load configuration and apply CLI overrides.
fn load_config(args: &Args) -> lab_services::Result<Config> {
    let mut config = Config::load()?;
    config.apply(Overrides {
        port: args.port,
        host: args.host.clone(),
        service: args.service,
        verbose: args.verbose,
    });
    Ok(config)
}

/// Check configuration validity.
fn cmd_check_config(loaded: lab_services::Result<Config>) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("LAB SERVICES - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match loaded {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Listen Address: {}:{}", config.host, config.port);
    println!("  Service: {}", config.service);
    for route in config.service.routes() {
        println!("    GET {}", route);
    }
    println!("  Metrics: {}", if config.metrics_enabled { "Enabled" } else { "Disabled" });
    println!("  Log Filter: {}", config.log_filter());
    println!("  Log Format: {}", if config.json_logs() { "JSON" } else { "Text" });
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server.
async fn cmd_serve(config: Config) -> anyhow::Result<()> {
    info!("Configuration loaded successfully");

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    let mut state = AppState::new(config.service);
    if config.metrics_enabled {
        match metrics::install_recorder() {
            Ok(handle) => state = state.with_metrics(handle),
            Err(e) => warn!("Metrics disabled: {}", e),
        }
    }

    server::run(&config, state).await?;
    Ok(())
}
