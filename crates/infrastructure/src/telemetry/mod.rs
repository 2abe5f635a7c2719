//! Logging initialisation
//!
//! Installs a `tracing` subscriber with an `EnvFilter` (overridable via
//! `RUST_LOG`) and either a human-readable or a JSON formatting layer.

use thiserror::Error;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogFormat;

/// Filter applied when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str =
    "realtime_gateway=info,presentation_http=info,ai_core=info,infrastructure=info,tower_http=debug";

/// Telemetry setup errors
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A global subscriber was already installed
    #[error("Failed to initialize logging: {0}")]
    Init(String),
}

/// Build the filter from `RUST_LOG`, falling back to `default_filter`
fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Install the global subscriber
pub fn init_logging(format: LogFormat, default_filter: &str) -> Result<(), TelemetryError> {
    let registry = tracing_subscriber::registry().with(env_filter(default_filter));

    let result = match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false),
            )
            .try_init(),
    };

    result.map_err(|e| TelemetryError::Init(e.to_string()))?;

    info!(format = %format, "Logging initialized");
    Ok(())
}
