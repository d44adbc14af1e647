// ABOUTME: Additive Holt linear trend model with automatically estimated smoothing parameters
// ABOUTME: Fits level/trend smoothing and initial state by minimising one-step-ahead squared error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

//! Holt's linear trend method (double exponential smoothing), non-damped, no seasonality.
//!
//! ```text
//! ŷ(t)  = l(t-1) + b(t-1)
//! l(t)  = α·y(t) + (1 − α)·(l(t-1) + b(t-1))
//! b(t)  = β·(l(t) − l(t-1)) + (1 − β)·b(t-1)
//! ŷ(T+h) = l(T) + h·b(T)
//! ```
//!
//! α, β ∈ [0, 1] and the initial state `l(0)`, `b(0)` are estimated jointly.

use super::nelder_mead::NelderMead;
use crate::config::OptimizerConfig;
use loadcast_core::constants::forecast::MIN_DAILY_POINTS;
use loadcast_core::errors::ForecastPipelineError;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Starting level smoothing coefficient for the search
const INITIAL_ALPHA: f64 = 0.5;
/// Starting trend smoothing coefficient for the search
const INITIAL_BETA: f64 = 0.1;

/// Smoothing coefficients and initial state of a Holt model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoltParameters {
    /// Level smoothing coefficient in [0, 1]
    pub alpha: f64,
    /// Trend smoothing coefficient in [0, 1]
    pub beta: f64,
    /// Level before the first observation
    pub initial_level: f64,
    /// Trend before the first observation
    pub initial_trend: f64,
}

impl HoltParameters {
    fn from_search_point(point: &[f64]) -> Self {
        Self {
            alpha: point[0].clamp(0.0, 1.0),
            beta: point[1].clamp(0.0, 1.0),
            initial_level: point[2],
            initial_trend: point[3],
        }
    }
}

/// State after running the smoothing recursions over a series
#[derive(Debug, Clone, Copy)]
struct FilterState {
    level: f64,
    trend: f64,
    sse: f64,
}

fn run_filter(values: &[f64], params: &HoltParameters) -> FilterState {
    let mut level = params.initial_level;
    let mut trend = params.initial_trend;
    let mut sse = 0.0;

    for &observed in values {
        let error = observed - (level + trend);
        sse = error.mul_add(error, sse);

        let previous_level = level;
        level = params.alpha.mul_add(observed, (1.0 - params.alpha) * (level + trend));
        trend = params
            .beta
            .mul_add(level - previous_level, (1.0 - params.beta) * trend);
    }

    FilterState { level, trend, sse }
}

/// Fitted Holt linear trend model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoltLinearTrend {
    parameters: HoltParameters,
    level: f64,
    trend: f64,
    sse: f64,
    observations: usize,
}

impl HoltLinearTrend {
    /// Fit the model, estimating α, β, and the initial state by minimising the
    /// in-sample sum of squared one-step-ahead errors.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientData` for fewer than two values and `Forecast` if the
    /// parameter search fails to converge or meets a non-finite value
    pub fn fit(values: &[f64], optimizer: &OptimizerConfig) -> Result<Self, ForecastPipelineError> {
        if values.len() < MIN_DAILY_POINTS {
            return Err(ForecastPipelineError::InsufficientData {
                required: MIN_DAILY_POINTS,
                actual: values.len(),
            });
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ForecastPipelineError::forecast(
                "series contains non-finite values",
            ));
        }

        let scale = values.iter().map(|v| v.abs()).fold(1.0_f64, f64::max);
        let start = [
            INITIAL_ALPHA,
            INITIAL_BETA,
            values[0],
            values[1] - values[0],
        ];
        let steps = [0.25, 0.1, 0.1 * scale, 0.05 * scale];

        let minimum = NelderMead::new(*optimizer)
            .minimize(
                |point| run_filter(values, &HoltParameters::from_search_point(point)).sse,
                &start,
                &steps,
            )
            .map_err(|e| {
                ForecastPipelineError::forecast(format!("smoothing parameter search failed: {e}"))
            })?;

        trace!(iterations = minimum.iterations, "Holt parameter search converged");
        Self::with_parameters(values, HoltParameters::from_search_point(&minimum.point))
    }

    /// Run the model with fixed parameters instead of estimating them
    ///
    /// # Errors
    ///
    /// Returns `Forecast` if the parameters are out of range or the recursions
    /// produce non-finite state
    pub fn with_parameters(
        values: &[f64],
        parameters: HoltParameters,
    ) -> Result<Self, ForecastPipelineError> {
        if !(0.0..=1.0).contains(&parameters.alpha) || !(0.0..=1.0).contains(&parameters.beta) {
            return Err(ForecastPipelineError::forecast(
                "smoothing coefficients must lie in [0, 1]",
            ));
        }

        let state = run_filter(values, &parameters);
        if !(state.level.is_finite() && state.trend.is_finite() && state.sse.is_finite()) {
            return Err(ForecastPipelineError::forecast(
                "smoothing recursions produced non-finite state",
            ));
        }

        Ok(Self {
            parameters,
            level: state.level,
            trend: state.trend,
            sse: state.sse,
            observations: values.len(),
        })
    }

    /// Project `horizon` future values: `level + h·trend` for h = 1..=horizon
    #[must_use]
    pub fn forecast(&self, horizon: usize) -> Vec<f64> {
        (1..=horizon)
            .map(|step| (step as f64).mul_add(self.trend, self.level))
            .collect()
    }

    /// Estimated parameters
    #[must_use]
    pub const fn parameters(&self) -> &HoltParameters {
        &self.parameters
    }

    /// Level after the last observation
    #[must_use]
    pub const fn level(&self) -> f64 {
        self.level
    }

    /// Trend after the last observation
    #[must_use]
    pub const fn trend(&self) -> f64 {
        self.trend
    }

    /// In-sample sum of squared one-step-ahead errors
    #[must_use]
    pub const fn sse(&self) -> f64 {
        self.sse
    }

    /// Number of observations the model was fitted on
    #[must_use]
    pub const fn observations(&self) -> usize {
        self.observations
    }
}
