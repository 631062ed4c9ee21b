//! # Simulator Runtime
//!
//! Entry point: load configuration, install logging, serve the session
//! gateway until Ctrl+C.

use anyhow::{Context, Result};
use qs_04_session_gateway::SessionGatewayService;
use sim_runtime::RuntimeConfig;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("failed to install logger")?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down"),
        Err(e) => error!(error = %e, "Failed to listen for Ctrl+C"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logging first so configuration warnings are visible
    init_logging(&RuntimeConfig::log_level_from(&|key: &str| std::env::var(key).ok()))?;

    let config = RuntimeConfig::from_env();
    info!(
        addr = %config.gateway.bind_addr(),
        ws_path = %config.gateway.ws_path,
        version = qs_04_session_gateway::VERSION,
        "Starting qubit-stream simulator"
    );

    let service = SessionGatewayService::new(config.gateway)
        .context("invalid gateway configuration")?;
    service
        .start(shutdown_signal())
        .await
        .context("session gateway failed")?;

    Ok(())
}
