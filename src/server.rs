//! HTTP server lifecycle: bind, mark ready, serve until shutdown.

use std::future::Future;

use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::error::Result;
use crate::utils::shutdown_signal;

/// Bind the configured address and serve until a shutdown signal arrives.
pub async fn run(config: &Config, state: AppState) -> Result<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    serve(listener, state).await
}

/// Serve on an already bound listener until Ctrl+C or SIGTERM.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    serve_with_shutdown(listener, state, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
///
/// The ready flag is raised once the router is built and cleared after the
/// server has drained.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    state: AppState,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!("HTTP server listening on {}", addr);
    info!("Service: {}", state.service);
    for route in state.service.routes() {
        info!("  GET {}", route);
    }

    let router = create_router(state.clone());
    state.set_ready(true);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    state.set_ready(false);
    info!("HTTP server stopped");
    Ok(())
}
