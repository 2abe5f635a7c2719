//! Realtime gateway HTTP presentation layer
//!
//! This crate provides the browser-facing HTTP API: realtime session
//! issuance, chat and reasoning relays, the weather tool callback and the
//! static demo page.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use middleware::{RequestId, RequestIdLayer, cors_layer};
pub use routes::create_router;
pub use server::serve_with_shutdown;
pub use state::AppState;
