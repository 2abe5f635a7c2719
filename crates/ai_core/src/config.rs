//! Configuration for the upstream LLM provider

use domain::ModelRole;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Configuration for the upstream provider client
#[derive(Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the provider API, including the version segment
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Provider API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Model used by the chat relay
    #[serde(default = "default_chat_model")]
    pub chat_model: String,

    /// Model used by the reasoning relay
    #[serde(default = "default_reasoning_model")]
    pub reasoning_model: String,

    /// Model requested when issuing realtime sessions
    #[serde(default = "default_realtime_model")]
    pub realtime_model: String,

    /// Voice requested when issuing realtime sessions
    #[serde(default = "default_realtime_voice")]
    pub realtime_voice: String,

    /// Request timeout in milliseconds (none = wait for the provider)
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("chat_model", &self.chat_model)
            .field("reasoning_model", &self.reasoning_model)
            .field("realtime_model", &self.realtime_model)
            .field("realtime_voice", &self.realtime_voice)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_chat_model() -> String {
    "gpt-4o".to_string()
}

fn default_reasoning_model() -> String {
    "o3-mini".to_string()
}

fn default_realtime_model() -> String {
    "gpt-4o-realtime-preview-2024-12-17".to_string()
}

fn default_realtime_voice() -> String {
    "echo".to_string()
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            chat_model: default_chat_model(),
            reasoning_model: default_reasoning_model(),
            realtime_model: default_realtime_model(),
            realtime_voice: default_realtime_voice(),
            timeout_ms: None,
        }
    }
}

impl UpstreamConfig {
    /// Create a config with the given API key and default models
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(SecretString::from(api_key.into())),
            ..Default::default()
        }
    }

    /// Get the API key as a string reference (for request headers)
    #[must_use]
    pub fn api_key_str(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .filter(|key| !key.trim().is_empty())
    }

    /// Model identifier serving the given role
    #[must_use]
    pub fn model_for(&self, role: ModelRole) -> &str {
        match role {
            ModelRole::Chat => &self.chat_model,
            ModelRole::Reasoning => &self.reasoning_model,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = UpstreamConfig::default();
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.chat_model, "gpt-4o");
        assert_eq!(config.reasoning_model, "o3-mini");
        assert_eq!(config.realtime_model, "gpt-4o-realtime-preview-2024-12-17");
        assert_eq!(config.realtime_voice, "echo");
        assert!(config.api_key.is_none());
        assert!(config.timeout_ms.is_none());
    }

    #[test]
    fn model_for_selects_by_role() {
        let config = UpstreamConfig::default();
        assert_eq!(config.model_for(ModelRole::Chat), "gpt-4o");
        assert_eq!(config.model_for(ModelRole::Reasoning), "o3-mini");
    }

    #[test]
    fn empty_api_key_counts_as_missing() {
        let config = UpstreamConfig::with_api_key("");
        assert!(config.api_key_str().is_none());
    }

    #[test]
    fn api_key_str_exposes_value() {
        let config = UpstreamConfig::with_api_key("sk-test");
        assert_eq!(config.api_key_str(), Some("sk-test"));
    }

    #[test]
    fn api_key_is_never_serialized() {
        let config = UpstreamConfig::with_api_key("sk-secret");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("sk-secret"));
        assert!(!json.contains("api_key"));
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = UpstreamConfig::with_api_key("sk-secret");
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("sk-secret"));
    }

    #[test]
    fn config_deserialization_with_defaults() {
        let json = r#"{"chat_model": "gpt-4o-mini", "api_key": "sk-from-file"}"#;
        let config: UpstreamConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.chat_model, "gpt-4o-mini");
        assert_eq!(config.reasoning_model, "o3-mini");
        assert_eq!(config.api_key_str(), Some("sk-from-file"));
    }
}
