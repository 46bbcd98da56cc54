use serde::{Deserialize, Serialize};

// =========================================================
// Forecast types + route
// =========================================================

/// A single timestamped observation (or projected value).
///
/// `ts` is an integer millisecond timestamp; its epoch is whatever the caller uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub ts: i64,
    pub value: f64,
}

impl Point {
    pub fn new(ts: i64, value: f64) -> Self {
        Self { ts, value }
    }
}

/// Request body for `POST /forecast`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRequest {
    /// Observations in submission order (not assumed sorted)
    pub series: Vec<Point>,
    /// Forward window past the latest observation, in milliseconds
    pub horizon_ms: i64,
    /// Spacing between projected points; defaults to the last observed delta
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_ms: Option<i64>,
}

impl ForecastRequest {
    pub fn new(series: Vec<Point>, horizon_ms: i64) -> Self {
        Self {
            series,
            horizon_ms,
            step_ms: None,
        }
    }

    pub fn with_step(mut self, step_ms: i64) -> Self {
        self.step_ms = Some(step_ms);
        self
    }
}

/// Response body for `POST /forecast`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    /// Projected points in increasing timestamp order
    pub points: Vec<Point>,
}

impl ForecastResponse {
    pub fn empty() -> Self {
        Self::default()
    }
}

pub const POST_FORECAST: &str = "/forecast";
