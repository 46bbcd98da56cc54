//! # Linear Forecast Service
//!
//! A small computational microservice that projects a time series forward.
//!
//! Callers submit a short series of timestamped observations together with a
//! horizon; the service fits the slope between the two most recent observations
//! and extrapolates it at a fixed step until the horizon is reached.
//!
//! ## Architecture
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API requests and responses
//! - [`routes`]: Route-specific data types and route paths
//! - [`services`]: The forecast computation itself
//! - [`config`]: Defaults, TOML file and environment variable handling
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```
//! use linear_forecast::api::{ForecastRequest, Point};
//! use linear_forecast::services::{linear_forecast, ForecastOptions};
//!
//! let request = ForecastRequest::new(vec![Point::new(0, 10.0), Point::new(1000, 20.0)], 3000);
//! let response = linear_forecast(&request, &ForecastOptions::default()).unwrap();
//!
//! let ts: Vec<i64> = response.points.iter().map(|p| p.ts).collect();
//! assert_eq!(ts, vec![2000, 3000, 4000]);
//! ```

pub mod api;

pub mod config;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
