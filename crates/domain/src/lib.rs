//! Domain layer for the realtime gateway
//!
//! Holds the few typed message shapes the gateway understands. Everything
//! else is relayed to the upstream provider as opaque text.

pub mod errors;
pub mod model;
pub mod weather;

pub use errors::DomainError;
pub use model::ModelRole;
pub use weather::{WeatherReport, WeatherRequest};
