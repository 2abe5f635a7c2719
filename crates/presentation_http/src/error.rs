//! API error handling
//!
//! Local failures map to 4xx/5xx codes. Upstream API failures keep the
//! status code the provider answered with, so callers see the provider's
//! verdict unchanged.

use ai_core::UpstreamError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Provider rejected the request; status is relayed as-is
    #[error("Upstream error ({status}): {message}")]
    Upstream { status: StatusCode, message: String },

    #[error("Bad gateway: {0}")]
    BadGateway(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl ApiError {
    /// HTTP status this error is reported with
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream { status, .. } => *status,
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    const fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::NotFound(_) => "not_found",
            Self::Upstream { .. } => "upstream_error",
            Self::BadGateway(_) => "bad_gateway",
            Self::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request failed");
        } else {
            tracing::debug!(status = %status, error = %self, "Request rejected");
        }

        let code = self.code().to_string();
        let error = match self {
            Self::BadRequest(msg)
            | Self::NotFound(msg)
            | Self::BadGateway(msg)
            | Self::Internal(msg)
            | Self::Upstream { message: msg, .. } => msg,
        };

        (status, Json(ErrorResponse { error, code })).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Api { status, message } => match StatusCode::from_u16(status) {
                Ok(status) if status.is_client_error() || status.is_server_error() => {
                    Self::Upstream { status, message }
                },
                _ => Self::BadGateway(format!("Upstream returned {status}: {message}")),
            },
            UpstreamError::MissingApiKey => Self::Internal(err.to_string()),
            UpstreamError::ConnectionFailed(_)
            | UpstreamError::RequestFailed(_)
            | UpstreamError::InvalidResponse(_)
            | UpstreamError::EmptySecret => Self::BadGateway(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_bad_request_message() {
        let err = ApiError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn api_error_upstream_message() {
        let err = ApiError::Upstream {
            status: StatusCode::TOO_MANY_REQUESTS,
            message: "slow down".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Upstream error (429 Too Many Requests): slow down"
        );
    }

    #[test]
    fn domain_error_converts_to_bad_request() {
        let source = DomainError::InvalidToolPayload("eof".to_string());
        let result: ApiError = source.into();
        assert!(matches!(result, ApiError::BadRequest(_)));
    }

    #[test]
    fn upstream_api_error_keeps_status() {
        let source = UpstreamError::Api {
            status: 401,
            message: "Incorrect API key provided".to_string(),
        };
        let result: ApiError = source.into();
        let ApiError::Upstream { status, message } = result else {
            unreachable!("Expected Upstream");
        };
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(message, "Incorrect API key provided");
    }

    #[test]
    fn upstream_non_error_status_becomes_bad_gateway() {
        let source = UpstreamError::Api {
            status: 302,
            message: "redirect".to_string(),
        };
        let result: ApiError = source.into();
        assert!(matches!(result, ApiError::BadGateway(_)));
    }

    #[test]
    fn upstream_transport_errors_become_bad_gateway() {
        for source in [
            UpstreamError::ConnectionFailed("refused".to_string()),
            UpstreamError::RequestFailed("reset".to_string()),
            UpstreamError::InvalidResponse("eof".to_string()),
            UpstreamError::EmptySecret,
        ] {
            let result: ApiError = source.into();
            assert_eq!(result.status(), StatusCode::BAD_GATEWAY);
        }
    }

    #[test]
    fn missing_api_key_is_internal() {
        let result: ApiError = UpstreamError::MissingApiKey.into();
        assert!(matches!(result, ApiError::Internal(_)));
    }

    #[test]
    fn into_response_uses_upstream_status() {
        let err = ApiError::Upstream {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: "overloaded".to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn into_response_not_found() {
        let response = ApiError::NotFound("/nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn into_response_internal() {
        let response = ApiError::Internal("crash".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_response_serialization() {
        let resp = ErrorResponse {
            error: "Bad request".to_string(),
            code: "bad_request".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"error":"Bad request","code":"bad_request"}"#);
    }
}
