//! Realtime session handler

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Session response body
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub success: bool,
    /// Ephemeral secret the browser uses to open its realtime connection
    pub key: String,
}

/// Issue an ephemeral realtime session credential
#[instrument(skip(state))]
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<Json<SessionResponse>, ApiError> {
    let secret = state.sessions.create_session().await?;

    Ok(Json(SessionResponse {
        success: true,
        key: secret.value,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_response_serialize() {
        let response = SessionResponse {
            success: true,
            key: "ek_123".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"success":true,"key":"ek_123"}"#);
    }
}
