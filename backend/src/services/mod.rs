//! Service layer for business logic.
//!
//! Services hold the computation behind each endpoint. They are synchronous and
//! free of I/O so the HTTP layer can run them on the blocking pool and tests can
//! call them directly.

pub mod forecast;

pub use forecast::{linear_forecast, ForecastError, ForecastOptions, ForecastResult, LinearFit};
