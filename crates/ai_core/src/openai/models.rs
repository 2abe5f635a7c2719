//! Wire formats for the OpenAI endpoints the gateway uses

use serde::{Deserialize, Serialize};

/// `POST /responses` request body
#[derive(Debug, Serialize)]
pub(super) struct ResponsesRequest<'a> {
    pub model: &'a str,
    pub input: &'a str,
}

/// `POST /responses` response body (only the parts the relay reads)
#[derive(Debug, Default, Deserialize)]
pub(super) struct ResponsesResponse {
    #[serde(default)]
    pub output: Vec<OutputItem>,
    /// Some compatible servers return the aggregate directly
    #[serde(default)]
    pub output_text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct OutputItem {
    #[serde(default)]
    pub content: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ContentPart {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
}

impl ResponsesResponse {
    /// Concatenate every `output_text` part across output items, in order
    pub fn output_text(&self) -> String {
        let mut parts = self
            .output
            .iter()
            .flat_map(|item| &item.content)
            .filter(|part| part.kind == "output_text")
            .filter_map(|part| part.text.as_deref())
            .peekable();

        if parts.peek().is_none() {
            return self.output_text.clone().unwrap_or_default();
        }

        parts.collect()
    }
}

/// `POST /realtime/sessions` request body
#[derive(Debug, Serialize)]
pub(super) struct RealtimeSessionRequest<'a> {
    pub model: &'a str,
    pub voice: &'a str,
}

/// `POST /realtime/sessions` response body
#[derive(Debug, Deserialize)]
pub(super) struct RealtimeSessionResponse {
    pub client_secret: ClientSecret,
}

#[derive(Debug, Deserialize)]
pub(super) struct ClientSecret {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub expires_at: Option<i64>,
}

/// Provider error envelope: `{"error": {"message": ..., "type": ...}}`
#[derive(Debug, Deserialize)]
pub(super) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorBody {
    pub message: String,
}

/// Best human-readable message for a failed response body
pub(super) fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}
