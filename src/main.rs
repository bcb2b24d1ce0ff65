use anyhow::Context;

use aquafeed::config::ConfigLoader;
use aquafeed::server::run_server;
use aquafeed::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::new()
        .load()
        .context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    init_tracing(&config).context("Failed to initialize telemetry")?;

    tracing::info!(
        "Starting aquafeed-api with config: {}",
        config.redacted_json().unwrap_or_else(|_| "<unavailable>".to_string())
    );

    run_server(config).await
}
