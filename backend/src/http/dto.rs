//! Data Transfer Objects for the HTTP API.
//!
//! The forecast wire types are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{ForecastRequest, ForecastResponse, Point};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Crate version
    pub version: String,
}
