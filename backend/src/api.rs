//! Public API surface for the forecast service.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::forecast::ForecastRequest;
pub use crate::routes::forecast::ForecastResponse;
pub use crate::routes::forecast::Point;
