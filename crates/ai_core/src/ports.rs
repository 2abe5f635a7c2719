//! Port definitions for the upstream provider
//!
//! The HTTP layer depends only on these traits, so handlers can be exercised
//! against in-memory fakes.

use std::fmt;

use async_trait::async_trait;
use domain::ModelRole;
use serde::{Deserialize, Serialize};

use crate::error::UpstreamError;

/// Ephemeral credential for a client-side realtime session
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSecret {
    /// The secret handed to the browser
    pub value: String,
    /// Expiry as unix seconds, when the provider reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

impl SessionSecret {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            expires_at: None,
        }
    }
}

impl fmt::Debug for SessionSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionSecret")
            .field("value", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Port for single-shot text generation
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send `input` to the model serving `role` and return its output text
    async fn respond(&self, role: ModelRole, input: String) -> Result<String, UpstreamError>;
}

/// Port for issuing realtime session credentials
#[async_trait]
pub trait SessionIssuer: Send + Sync {
    async fn create_session(&self) -> Result<SessionSecret, UpstreamError>;
}
