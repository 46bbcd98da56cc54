//! Two-point linear extrapolation.
//!
//! The slope is fitted from the two most recent observations (by timestamp) and
//! projected forward from the latest one at a fixed step until the horizon is
//! reached. Everything here is a pure function of its inputs.

use crate::api::{ForecastRequest, ForecastResponse, Point};

/// Upper bound on the up-front allocation for the output vector.
const MAX_PREALLOCATED_POINTS: usize = 1 << 16;

/// Result type for forecast operations
pub type ForecastResult<T> = Result<T, ForecastError>;

/// Errors raised for requests the projection loop cannot serve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ForecastError {
    /// A negative step would never move past the horizon bound.
    #[error("stepMs must be positive, got {step}")]
    NonPositiveStep { step: i64 },

    /// The horizon/step ratio exceeds the configured output cap.
    #[error("forecast would produce {requested} points, limit is {limit}")]
    TooManyPoints { requested: u128, limit: usize },

    /// The fitted line leaves the range of `f64` before the horizon.
    #[error("projected value at ts={ts} is not a finite number")]
    NonFiniteValue { ts: i64 },
}

/// Tuning knobs applied on top of the request itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForecastOptions {
    /// Maximum number of projected points; `None` leaves the output unbounded.
    pub max_points: Option<usize>,
}

impl ForecastOptions {
    pub fn with_max_points(max_points: usize) -> Self {
        Self {
            max_points: Some(max_points),
        }
    }
}

/// Slope and default spacing fitted from the last two observations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Latest observation; projection starts from here
    pub anchor: Point,
    /// Time between the last two observations, floored at 1ms
    pub delta_ms: i64,
    /// Value change per millisecond
    pub rate: f64,
}

impl LinearFit {
    /// Fit the series, or `None` when it holds fewer than two points.
    ///
    /// The series is sorted on a copy with a stable sort, so observations sharing a
    /// timestamp keep their submitted order and the later-submitted one wins.
    pub fn from_series(series: &[Point]) -> Option<Self> {
        if series.len() < 2 {
            return None;
        }

        let mut sorted = series.to_vec();
        sorted.sort_by_key(|p| p.ts);

        let p1 = sorted[sorted.len() - 2];
        let p2 = sorted[sorted.len() - 1];

        // Widened so extreme timestamps cannot overflow.
        let delta = (i128::from(p2.ts) - i128::from(p1.ts)).max(1);
        let rate = (p2.value - p1.value) / delta as f64;

        Some(Self {
            anchor: p2,
            delta_ms: i64::try_from(delta).unwrap_or(i64::MAX),
            rate,
        })
    }

    /// Resolve the projection step from the requested one.
    ///
    /// Absent and zero steps both fall back to the observed delta.
    pub fn resolve_step(&self, step_ms: Option<i64>) -> ForecastResult<i64> {
        match step_ms {
            None | Some(0) => Ok(self.delta_ms),
            Some(step) if step < 0 => Err(ForecastError::NonPositiveStep { step }),
            Some(step) => Ok(step),
        }
    }

    /// Projected value at `ts`.
    pub fn value_at(&self, ts: i64) -> f64 {
        let elapsed = i128::from(ts) - i128::from(self.anchor.ts);
        self.anchor.value + self.rate * elapsed as f64
    }

    /// Last timestamp a projected point may carry.
    pub fn horizon_end(&self, horizon_ms: i64) -> i64 {
        self.anchor.ts.saturating_add(horizon_ms)
    }

    /// Number of points `project` would emit for this horizon and step.
    pub fn point_count(&self, horizon_ms: i64, step: i64) -> u128 {
        if step <= 0 {
            return 0;
        }
        let first = i128::from(self.anchor.ts) + i128::from(step);
        let end = i128::from(self.horizon_end(horizon_ms));
        if first > end {
            0
        } else {
            ((end - first) / i128::from(step) + 1) as u128
        }
    }

    /// Emit points at `anchor.ts + k * step` for k = 1, 2, ... while inside the horizon.
    pub fn project(
        &self,
        horizon_ms: i64,
        step: i64,
        options: &ForecastOptions,
    ) -> ForecastResult<Vec<Point>> {
        if step <= 0 {
            return Err(ForecastError::NonPositiveStep { step });
        }

        let count = self.point_count(horizon_ms, step);
        if let Some(limit) = options.max_points {
            if count > limit as u128 {
                return Err(ForecastError::TooManyPoints {
                    requested: count,
                    limit,
                });
            }
        }

        let end_ts = self.horizon_end(horizon_ms);
        let capacity = usize::try_from(count)
            .unwrap_or(usize::MAX)
            .min(MAX_PREALLOCATED_POINTS);
        let mut points = Vec::with_capacity(capacity);

        // Stepping past i64::MAX also means stepping past end_ts.
        let mut next = self.anchor.ts.checked_add(step);
        while let Some(t) = next.filter(|t| *t <= end_ts) {
            let value = self.value_at(t);
            if !value.is_finite() {
                return Err(ForecastError::NonFiniteValue { ts: t });
            }
            points.push(Point::new(t, value));
            next = t.checked_add(step);
        }

        Ok(points)
    }
}

/// Compute the linear forecast for a request.
///
/// Fewer than two observations is not an error: the response is simply empty.
///
/// # Errors
/// - [`ForecastError::NonPositiveStep`] if `stepMs` is negative
/// - [`ForecastError::TooManyPoints`] if `options.max_points` would be exceeded
/// - [`ForecastError::NonFiniteValue`] if a projected value overflows `f64`
pub fn linear_forecast(
    request: &ForecastRequest,
    options: &ForecastOptions,
) -> ForecastResult<ForecastResponse> {
    let Some(fit) = LinearFit::from_series(&request.series) else {
        return Ok(ForecastResponse::empty());
    };

    let step = fit.resolve_step(request.step_ms)?;
    let points = fit.project(request.horizon_ms, step, options)?;

    Ok(ForecastResponse { points })
}
