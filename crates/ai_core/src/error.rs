//! Upstream provider errors

use thiserror::Error;

/// Errors that can occur while talking to the LLM provider
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Failed to connect to the provider
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the provider failed before a response arrived
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Provider answered with a non-success status
    #[error("Upstream returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Session response carried no client secret
    #[error("Received empty client secret from upstream")]
    EmptySecret,

    /// No API key was configured
    #[error("API key is not configured")]
    MissingApiKey,
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
