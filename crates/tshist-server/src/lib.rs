// File: crates/tshist-server/src/lib.rs
// Summary: HTTP layer around the ts-hist pipeline: routes, config, logging and the serve loop.

pub mod app;
pub mod config;
pub mod logging;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;
use tshist_core::Pipeline;

pub use app::{router, AppError};
pub use config::ServerConfig;

/// Bind, serve until Ctrl-C, then drain in-flight requests.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let ServerConfig { addr, workers, pipeline, .. } = config;
    let pipeline = Arc::new(Pipeline::new(pipeline).context("invalid chart configuration")?);

    let listener = TcpListener::bind(addr).await.with_context(|| format!("binding {addr}"))?;
    info!(addr = %listener.local_addr()?, workers, "ts-hist server listening");

    axum::serve(listener, router(pipeline))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
