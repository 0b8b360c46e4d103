// StyleType Entry Point
// Loads configuration, installs logging and serves the dashboard

use anyhow::Context;
use styletype_core::config::AppConfig;
use styletype_core::{logging, server};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    logging::init(config.log_format).context("Failed to initialize logging")?;

    info!(
        host = %config.host,
        port = config.port,
        max_text_chars = config.max_text_chars,
        "Starting StyleType v{}",
        env!("CARGO_PKG_VERSION")
    );

    server::run(config).await.context("Dashboard server failed")?;
    Ok(())
}
