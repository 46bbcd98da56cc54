//! Forecast HTTP Server Binary
//!
//! This is the main entry point for the forecast REST API server.
//! It loads configuration, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin forecast-server
//!
//! # With an explicit config file
//! FORECAST_CONFIG=backend/forecast.toml cargo run --bin forecast-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `FORECAST_CONFIG`: Path to a TOML config file (optional)
//! - `FORECAST_BODY_LIMIT`: Maximum request body size in bytes (default: 2 MiB)
//! - `FORECAST_MAX_POINTS`: Maximum points per forecast, 0 = unlimited (default: 100000)
//! - `RUST_LOG`: Log filter (default: info)

use tracing::info;
use tracing_subscriber::EnvFilter;

use linear_forecast::config::AppConfig;
use linear_forecast::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting forecast server v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!(
        max_points = config.forecast.max_points,
        body_limit_bytes = config.server.body_limit_bytes,
        "Configuration loaded"
    );

    let addr = config.bind_address();
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
