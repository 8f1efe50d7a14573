use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::ServerError;

mod config;
mod error;
mod routes;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::try_new(&config.log_filter).map_err(|source| ServerError::LogFilter {
        filter: config.log_filter.clone(),
        source,
    })?;
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter)
        .compact()
        .init();

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.addr,
            source,
        })?;
    tracing::info!("Server running at http://{}", config.addr);

    axum::serve(listener, routes::router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }
}
