//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::ForecastOptions;

/// Shared application state passed to all handlers.
#[derive(Clone, Default)]
pub struct AppState {
    /// Resolved configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new application state with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn forecast_options(&self) -> ForecastOptions {
        self.config.forecast.options()
    }
}
