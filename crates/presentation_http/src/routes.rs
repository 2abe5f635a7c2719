//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
///
/// Each route accepts a single method; axum answers other methods with 405.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Demo page
        .route("/", get(handlers::index::index))
        // Liveness
        .route("/health", get(handlers::health::health_check))
        // Realtime session credentials
        .route("/session", get(handlers::session::create_session))
        // Text relays
        .route("/chat", post(handlers::chat::chat))
        .route("/reasoning", post(handlers::chat::reasoning))
        // Tool callbacks
        .route("/tools/getWeather", post(handlers::tools::get_weather))
        .fallback(handlers::index::not_found)
        // Attach state
        .with_state(state)
}
