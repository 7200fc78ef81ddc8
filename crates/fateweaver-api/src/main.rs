//! Fateweaver API server entry point.

use std::error::Error;

use fateweaver_api::config::ServerConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Fateweaver API server");

    // Read configuration from environment.
    let config = ServerConfig::from_env()?;
    tracing::info!(engine = ?config.engine, "building shared engine");

    fateweaver_api::serve(config).await?;

    Ok(())
}
