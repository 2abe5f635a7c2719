//! CORS layer built from the configured origin list

use axum::http::{HeaderValue, Method};
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

/// Every configured origin was rejected
#[derive(Debug, Error)]
#[error("None of the configured CORS origins are valid: {0:?}")]
pub struct NoValidOrigins(pub Vec<String>);

/// Build the CORS layer
///
/// An empty list allows any origin. Otherwise only `GET` and `POST` from the
/// listed origins are allowed. Entries that are not `http(s)://host[:port]`
/// are skipped with a warning; startup fails if none remain.
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, NoValidOrigins> {
    if allowed_origins.is_empty() {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let origins = parse_origins(allowed_origins);
    if origins.is_empty() {
        return Err(NoValidOrigins(allowed_origins.to_vec()));
    }

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any))
}

/// Keep the origins a browser could actually send, warning about the rest
pub fn parse_origins(allowed_origins: &[String]) -> Vec<HeaderValue> {
    allowed_origins
        .iter()
        .filter_map(|origin| match parse_origin(origin) {
            Some(value) => Some(value),
            None => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            },
        })
        .collect()
}

fn parse_origin(origin: &str) -> Option<HeaderValue> {
    let origin = origin.trim();
    let host = origin
        .strip_prefix("https://")
        .or_else(|| origin.strip_prefix("http://"))?;
    if host.is_empty() || host.contains('/') || !origin.is_ascii() {
        return None;
    }
    HeaderValue::from_str(origin).ok()
}
