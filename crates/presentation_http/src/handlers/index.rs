//! Static page and fallback handlers

use std::io::ErrorKind;

use axum::{extract::State, http::Uri, response::Html};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Serve the demo page
#[instrument(skip(state), fields(path = %state.index_path.display()))]
pub async fn index(State(state): State<AppState>) -> Result<Html<Vec<u8>>, ApiError> {
    match tokio::fs::read(state.index_path.as_path()).await {
        Ok(contents) => Ok(Html(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!("Index page is missing");
            Err(ApiError::NotFound("/".to_string()))
        },
        Err(e) => Err(ApiError::Internal(format!("Failed to read index page: {e}"))),
    }
}

/// Answer unmatched paths with 404
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
