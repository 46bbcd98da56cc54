//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{extract::State, http::Uri, Json};
use tracing::debug;

use super::dto::{ForecastRequest, ForecastResponse, HealthResponse};
use super::error::AppError;
use super::extract::ApiJson;
use super::state::AppState;
use crate::services::linear_forecast;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Forecast
// =============================================================================

/// POST /forecast
///
/// Project the submitted series forward over the requested horizon.
pub async fn forecast(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ForecastRequest>,
) -> HandlerResult<ForecastResponse> {
    let options = state.forecast_options();
    let series_len = request.series.len();
    let horizon_ms = request.horizon_ms;
    let step_ms = request.step_ms;

    // Output size scales with horizon/step, so keep it off the async workers.
    let response = tokio::task::spawn_blocking(move || linear_forecast(&request, &options))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    debug!(
        series_len,
        horizon_ms,
        ?step_ms,
        points = response.points.len(),
        "Forecast computed"
    );

    Ok(Json(response))
}

// =============================================================================
// Fallback
// =============================================================================

/// Any unmatched route.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
