//! Domain-level errors

use thiserror::Error;

/// Errors that can occur while decoding gateway payloads
#[derive(Debug, Error)]
pub enum DomainError {
    /// Tool callback body could not be decoded
    #[error("Invalid tool payload: {0}")]
    InvalidToolPayload(String),

    /// Relay body is not usable as model input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
