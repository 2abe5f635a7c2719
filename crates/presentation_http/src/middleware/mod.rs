//! HTTP middleware components

pub mod cors;
pub mod request_id;

pub use cors::{NoValidOrigins, cors_layer};
pub use request_id::{REQUEST_ID_HEADER, RequestId, RequestIdLayer};
