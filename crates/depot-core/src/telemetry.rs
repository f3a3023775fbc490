//! Tracing bootstrap.
//!
//! Logs are written to stderr so that stdout stays reserved for the
//! console output of the driver.

#[cfg(feature = "telemetry")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::DepotResult;

/// Default filter directive when neither `RUST_LOG` nor config provide one.
pub const DEFAULT_FILTER: &str = "info,depot=debug";

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `level`. When `json` is set, events are
/// emitted as one JSON object per line.
#[cfg(feature = "telemetry")]
pub fn init_tracing(level: &str, json: bool) -> DepotResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(filter);

    let result = if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| crate::DepotError::Internal(format!("Failed to initialize tracing: {}", e)))
}

/// Placeholder for when telemetry feature is disabled.
#[cfg(not(feature = "telemetry"))]
pub fn init_tracing(_level: &str, _json: bool) -> DepotResult<()> {
    Ok(())
}

#[cfg(all(test, feature = "telemetry"))]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_reports_error() {
        assert!(init_tracing("debug", false).is_ok());
        assert!(init_tracing("debug", true).is_err());
    }
}
