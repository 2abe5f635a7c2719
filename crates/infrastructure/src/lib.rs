//! Infrastructure layer - Configuration and process-wide plumbing
//!
//! Loads the gateway configuration from `.env`, an optional `gateway.toml`
//! and the environment, and initialises logging.

pub mod config;
pub mod telemetry;

pub use config::{API_KEY_ENV, AppConfig, ConfigError, LogFormat, ServerConfig};
pub use telemetry::{TelemetryError, init_logging};
