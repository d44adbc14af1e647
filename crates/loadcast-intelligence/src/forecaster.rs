// ABOUTME: Forecaster fitting a Holt linear trend to a daily series and dating the projections
// ABOUTME: Forecast dates are the consecutive days right after the series' last date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

use crate::algorithms::HoltLinearTrend;
use crate::config::ForecastConfig;
use loadcast_core::errors::ForecastPipelineError;
use loadcast_core::models::{DailySeries, ForecastPoint};
use tracing::debug;

/// Projects future daily load from a densified history
#[derive(Debug, Clone, Copy, Default)]
pub struct Forecaster {
    config: ForecastConfig,
}

impl Forecaster {
    /// Create a forecaster with the given configuration
    #[must_use]
    pub const fn new(config: ForecastConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Fit the trend model and produce `horizon` forecast points.
    ///
    /// # Errors
    ///
    /// Returns `Forecast` if the model cannot be fitted or yields non-finite
    /// predictions, and `InsufficientData` for a series shorter than two days
    pub fn forecast(
        &self,
        series: &DailySeries,
    ) -> Result<Vec<ForecastPoint>, ForecastPipelineError> {
        let model = HoltLinearTrend::fit(series.values(), &self.config.optimizer)?;
        let parameters = model.parameters();
        debug!(
            observations = model.observations(),
            alpha = parameters.alpha,
            beta = parameters.beta,
            level = model.level(),
            trend = model.trend(),
            sse = model.sse(),
            "Fitted Holt linear trend"
        );

        let predictions = model.forecast(self.config.horizon);
        if predictions.iter().any(|p| !p.is_finite()) {
            return Err(ForecastPipelineError::forecast(
                "trend model produced non-finite predictions",
            ));
        }

        let points: Vec<ForecastPoint> = series
            .end()
            .iter_days()
            .skip(1)
            .zip(predictions)
            .map(|(date, predicted_load)| ForecastPoint {
                date,
                predicted_load,
            })
            .collect();

        if points.len() < self.config.horizon {
            return Err(ForecastPipelineError::forecast(
                "forecast dates exceed the supported calendar",
            ));
        }
        Ok(points)
    }
}
