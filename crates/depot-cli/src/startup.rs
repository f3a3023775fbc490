//! Startup reporting.

use depot_config::{AppConfig, Backend};
use tracing::info;
use url::Url;

/// Strips credentials from a database URL so it can be logged.
#[must_use]
pub fn redact_url(raw: &str) -> String {
    redact(raw).unwrap_or_else(|| "<unparseable>".to_string())
}

fn redact(raw: &str) -> Option<String> {
    let mut url = Url::parse(raw).ok()?;
    if !url.username().is_empty() {
        url.set_username("***").ok()?;
    }
    if url.password().is_some() {
        url.set_password(Some("***")).ok()?;
    }
    Some(url.to_string())
}

/// Logs the effective configuration at startup.
pub fn log_startup_info(config: &AppConfig) {
    info!("Environment: {}", config.app.environment);
    info!("Backend: {}", config.database.backend);
    if config.database.backend == Backend::Mysql {
        info!("Database: {}", redact_url(&config.database.url));
    }
}
