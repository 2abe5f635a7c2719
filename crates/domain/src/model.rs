//! Model role - Selects which upstream model serves a relay request

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of upstream model a request is routed to
///
/// Both roles share the same request shape (plain text in, plain text out);
/// they differ only in the model identifier sent upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelRole {
    /// General purpose conversational model
    Chat,
    /// Slower model tuned for multi-step reasoning
    Reasoning,
}

impl ModelRole {
    /// Short lowercase name, used in logs and config keys
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Reasoning => "reasoning",
        }
    }
}

impl fmt::Display for ModelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
