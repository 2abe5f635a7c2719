//! OpenAI provider implementation
//!
//! Talks to the Responses API for chat and reasoning relays and to the
//! realtime sessions endpoint for ephemeral browser credentials.

mod client;
mod models;

pub use client::OpenAiClient;
