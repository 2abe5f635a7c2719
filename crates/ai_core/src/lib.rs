//! AI Core - Upstream LLM provider access
//!
//! Provides the ports the HTTP layer relays through and an OpenAI adapter
//! implementing them (Responses API and realtime session issuance).

pub mod config;
pub mod error;
pub mod openai;
pub mod ports;

pub use config::UpstreamConfig;
pub use error::UpstreamError;
pub use openai::OpenAiClient;
pub use ports::{SessionIssuer, SessionSecret, TextGenerator};
