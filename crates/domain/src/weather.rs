//! Weather tool messages
//!
//! The weather tool is a demonstration callback for client-side tool calling.
//! It always reports the same conditions regardless of the requested location.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::DomainError;

/// Temperature reported for every location
pub const FIXED_TEMPERATURE: i32 = 18;

/// Units of [`FIXED_TEMPERATURE`]
pub const FIXED_UNITS: &str = "C";

/// Incoming weather tool call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherRequest {
    /// Free-form location name as produced by the model; empty when absent
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
}

impl WeatherRequest {
    /// Decode a tool call body
    ///
    /// The body must be well-formed JSON holding an object (or `null`).
    /// A missing or `null` location decodes as an empty string.
    pub fn from_json(body: &[u8]) -> Result<Self, DomainError> {
        let value: Value = serde_json::from_slice(body).map_err(invalid_payload)?;
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(_) => serde_json::from_value(value).map_err(invalid_payload),
            _ => Err(DomainError::InvalidToolPayload(
                "expected a JSON object".to_string(),
            )),
        }
    }
}

fn invalid_payload(err: serde_json::Error) -> DomainError {
    DomainError::InvalidToolPayload(err.to_string())
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Weather tool result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temperature: i32,
    pub units: String,
}

impl WeatherReport {
    /// The canned report returned for every request
    #[must_use]
    pub fn fixed() -> Self {
        Self {
            temperature: FIXED_TEMPERATURE,
            units: FIXED_UNITS.to_string(),
        }
    }
}
