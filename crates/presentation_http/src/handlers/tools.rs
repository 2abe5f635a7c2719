//! Tool callback handlers

use axum::{Json, body::Bytes};
use domain::{WeatherReport, WeatherRequest};
use tracing::{info, instrument};

use crate::error::ApiError;

/// Weather tool callback
///
/// The body is decoded as JSON whatever its declared content type. The
/// answer is the same canned report for every location.
#[instrument(skip(body), fields(body_len = body.len()))]
pub async fn get_weather(body: Bytes) -> Result<Json<WeatherReport>, ApiError> {
    let request = WeatherRequest::from_json(&body)?;

    info!(location = %request.location, "Weather request received");

    Ok(Json(WeatherReport::fixed()))
}
