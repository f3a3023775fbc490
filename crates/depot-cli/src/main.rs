//! # Depot
//!
//! Runs the department walkthrough against the configured backend.

use depot_config::{ConfigLoader, LoggingConfig};
use depot_core::telemetry::init_tracing;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = ConfigLoader::from_default_location().load();

    let logging = config
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_else(|_| LoggingConfig::default());
    if let Err(e) = init_tracing(&logging.level, logging.json) {
        eprintln!("{}", e);
    }

    info!("Starting Depot...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let result = match config {
        Ok(config) => depot_cli::run(config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        error!(code = e.error_code(), "Application error: {}", e);
        std::process::exit(1);
    }
}
