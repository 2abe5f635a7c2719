//! OpenAI HTTP client

use async_trait::async_trait;
use domain::ModelRole;
use reqwest::{Client, Response};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use super::models::{
    RealtimeSessionRequest, RealtimeSessionResponse, ResponsesRequest, ResponsesResponse,
    error_message,
};
use crate::config::UpstreamConfig;
use crate::error::UpstreamError;
use crate::ports::{SessionIssuer, SessionSecret, TextGenerator};

/// Client for the OpenAI REST API
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    config: UpstreamConfig,
}

impl OpenAiClient {
    /// Create a new client; fails when no API key is configured
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        if config.api_key_str().is_none() {
            return Err(UpstreamError::MissingApiKey);
        }

        let mut builder = Client::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder
            .build()
            .map_err(|e| UpstreamError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            chat_model = %config.chat_model,
            reasoning_model = %config.reasoning_model,
            "Initialized OpenAI client"
        );

        Ok(Self { client, config })
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// POST a JSON body and return the response if its status is a success
    async fn post_json<T: Serialize + Sync>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Response, UpstreamError> {
        let api_key = self
            .config
            .api_key_str()
            .ok_or(UpstreamError::MissingApiKey)?;

        let response = self
            .client
            .post(self.api_url(endpoint))
            .bearer_auth(api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.text().await {
                Ok(body) => error_message(&body),
                Err(e) => {
                    warn!(error = %e, endpoint, "Failed to read upstream error body");
                    format!("failed to read error body: {e}")
                },
            };
            warn!(status = %status, endpoint, "Upstream request failed");
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    #[instrument(skip(self, input), fields(model = %self.config.model_for(role), input_len = input.len()))]
    async fn respond(&self, role: ModelRole, input: String) -> Result<String, UpstreamError> {
        let request = ResponsesRequest {
            model: self.config.model_for(role),
            input: &input,
        };

        debug!("Sending request to responses endpoint");

        let response: ResponsesResponse = self
            .post_json("responses", &request)
            .await?
            .json()
            .await
            .map_err(|e| UpstreamError::InvalidResponse(e.to_string()))?;

        let text = response.output_text();
        debug!(output_len = text.len(), "Response completed");
        Ok(text)
    }
}

#[async_trait]
impl SessionIssuer for OpenAiClient {
    #[instrument(skip(self), fields(model = %self.config.realtime_model))]
    async fn create_session(&self) -> Result<SessionSecret, UpstreamError> {
        let request = RealtimeSessionRequest {
            model: &self.config.realtime_model,
            voice: &self.config.realtime_voice,
        };

        let session: RealtimeSessionResponse = self
            .post_json("realtime/sessions", &request)
            .await?
            .json()
            .await
            .map_err(|e| {
                UpstreamError::InvalidResponse(format!("failed to decode token response: {e}"))
            })?;

        if session.client_secret.value.is_empty() {
            return Err(UpstreamError::EmptySecret);
        }

        debug!(expires_at = ?session.client_secret.expires_at, "Realtime session issued");

        Ok(SessionSecret {
            value: session.client_secret.value,
            expires_at: session.client_secret.expires_at,
        })
    }
}
