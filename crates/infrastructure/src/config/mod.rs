//! Application configuration
//!
//! Sources, lowest precedence first:
//! - built-in defaults
//! - `gateway.toml` in the working directory (optional)
//! - `GATEWAY_*` environment variables, `__` separating nested keys
//!   (e.g. `GATEWAY_SERVER__PORT=9000`)
//! - `OPENAI_API_KEY`, used when no key was configured above
//!
//! A `.env` file in the working directory is loaded into the process
//! environment first, when present.

mod server;

use ai_core::UpstreamConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

pub use server::{LogFormat, ServerConfig};

/// Environment variable holding the provider API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Prefix for configuration overrides from the environment
pub const ENV_PREFIX: &str = "GATEWAY";

/// Optional configuration file, relative to the working directory
pub const CONFIG_FILE: &str = "gateway.toml";

/// Errors raised while assembling the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration source could not be read or deserialized
    #[error("Invalid configuration: {0}")]
    Source(#[from] config::ConfigError),

    /// The `.env` file exists but could not be parsed
    #[error("Failed to load .env file: {0}")]
    DotEnv(String),

    /// No provider API key is available
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream provider configuration
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

impl AppConfig {
    /// Load configuration from `.env`, the config file and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => {},
            Err(e) if e.not_found() => {},
            Err(e) => return Err(ConfigError::DotEnv(e.to_string())),
        }

        Self::from_vars(Some(Path::new(CONFIG_FILE)), std::env::vars().collect())
    }

    /// Build configuration from an optional file and an explicit variable map
    ///
    /// `vars` stands in for the process environment, so callers can resolve
    /// configuration without mutating global state.
    pub fn from_vars(
        file: Option<&Path>,
        vars: HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let api_key_fallback = vars.get(API_KEY_ENV).cloned();

        let builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("server.allowed_origins")
                .try_parsing(true)
                .source(Some(vars)),
        );

        let mut config: Self = builder.build()?.try_deserialize()?;

        if config.upstream.api_key_str().is_none() {
            config.upstream.api_key = api_key_fallback
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from);
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that everything required to serve requests is present
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upstream.api_key_str().is_none() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let result = AppConfig::from_vars(None, vars(&[]));
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn blank_api_key_is_an_error() {
        let result = AppConfig::from_vars(None, vars(&[(API_KEY_ENV, "   ")]));
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn missing_api_key_message_names_variable() {
        assert_eq!(
            ConfigError::MissingApiKey.to_string(),
            "OPENAI_API_KEY is not set"
        );
    }

    #[test]
    fn api_key_from_environment() {
        let config = AppConfig::from_vars(None, vars(&[(API_KEY_ENV, "sk-env")])).unwrap();
        assert_eq!(config.upstream.api_key_str(), Some("sk-env"));
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.upstream.chat_model, "gpt-4o");
    }

    #[test]
    fn prefixed_variables_override_defaults() {
        let config = AppConfig::from_vars(
            None,
            vars(&[
                (API_KEY_ENV, "sk-env"),
                ("GATEWAY_SERVER__PORT", "9000"),
                ("GATEWAY_SERVER__LOG_FORMAT", "json"),
                ("GATEWAY_UPSTREAM__CHAT_MODEL", "gpt-4o-mini"),
                ("GATEWAY_UPSTREAM__BASE_URL", "http://localhost:4010/v1"),
            ]),
        )
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert_eq!(config.upstream.chat_model, "gpt-4o-mini");
        assert_eq!(config.upstream.base_url, "http://localhost:4010/v1");
        assert_eq!(config.upstream.reasoning_model, "o3-mini");
    }

    #[test]
    fn allowed_origins_parse_as_list() {
        let config = AppConfig::from_vars(
            None,
            vars(&[
                (API_KEY_ENV, "sk-env"),
                (
                    "GATEWAY_SERVER__ALLOWED_ORIGINS",
                    "http://localhost:3000,https://demo.example",
                ),
            ]),
        )
        .unwrap();

        assert_eq!(
            config.server.allowed_origins,
            vec!["http://localhost:3000", "https://demo.example"]
        );
    }

    #[test]
    fn file_values_are_loaded() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nport = 7070\nindex_path = \"public/index.html\"\n\n[upstream]\nreasoning_model = \"o1\"\napi_key = \"sk-file\""
        )
        .unwrap();

        let config = AppConfig::from_vars(Some(file.path()), vars(&[])).unwrap();

        assert_eq!(config.server.port, 7070);
        assert_eq!(
            config.server.index_path,
            std::path::PathBuf::from("public/index.html")
        );
        assert_eq!(config.upstream.reasoning_model, "o1");
        assert_eq!(config.upstream.api_key_str(), Some("sk-file"));
    }

    #[test]
    fn configured_key_wins_over_fallback_variable() {
        let config = AppConfig::from_vars(
            None,
            vars(&[
                (API_KEY_ENV, "sk-fallback"),
                ("GATEWAY_UPSTREAM__API_KEY", "sk-configured"),
            ]),
        )
        .unwrap();

        assert_eq!(config.upstream.api_key_str(), Some("sk-configured"));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let config = AppConfig::from_vars(
            Some(Path::new("does-not-exist/gateway.toml")),
            vars(&[(API_KEY_ENV, "sk-env")]),
        );
        assert!(config.is_ok());
    }

    #[test]
    fn serialized_config_omits_api_key() {
        let config = AppConfig::from_vars(None, vars(&[(API_KEY_ENV, "sk-hidden")])).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("sk-hidden"));
    }
}
