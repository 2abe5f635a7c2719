//! Chat and reasoning relay handlers
//!
//! Both endpoints take the raw request body as model input and answer with
//! the model's output text. They differ only in the upstream model.

use axum::{body::Bytes, extract::State};
use domain::{DomainError, ModelRole};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Relay a prompt to the chat model
#[instrument(skip(state, body), fields(body_len = body.len()))]
pub async fn chat(State(state): State<AppState>, body: Bytes) -> Result<String, ApiError> {
    relay(&state, ModelRole::Chat, &body).await
}

/// Relay a prompt to the reasoning model
#[instrument(skip(state, body), fields(body_len = body.len()))]
pub async fn reasoning(State(state): State<AppState>, body: Bytes) -> Result<String, ApiError> {
    relay(&state, ModelRole::Reasoning, &body).await
}

async fn relay(state: &AppState, role: ModelRole, body: &[u8]) -> Result<String, ApiError> {
    let input = decode_input(body)?;
    let output = state.generator.respond(role, input).await?;
    tracing::debug!(role = %role, output_len = output.len(), "Relayed model output");
    Ok(output)
}

/// Interpret the request body as UTF-8 model input
fn decode_input(body: &[u8]) -> Result<String, DomainError> {
    String::from_utf8(body.to_vec())
        .map_err(|e| DomainError::InvalidInput(format!("body is not valid UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_input_keeps_text_verbatim() {
        let input = decode_input(b"  What is 2+2?\n").unwrap();
        assert_eq!(input, "  What is 2+2?\n");
    }

    #[test]
    fn decode_input_accepts_empty_body() {
        assert_eq!(decode_input(b"").unwrap(), "");
    }

    #[test]
    fn decode_input_rejects_invalid_utf8() {
        let result = decode_input(&[0xff, 0xfe, 0x00]);
        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
    }
}
