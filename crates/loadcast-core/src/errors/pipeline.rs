// ABOUTME: Error kinds raised by the aggregation, densification, and forecasting stages
// ABOUTME: Each kind maps to a distinct client or server failure at the HTTP boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

use super::AppError;
use thiserror::Error;

/// Terminal failures of the forecasting pipeline.
///
/// None of these are retried; the first failing stage short-circuits the pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForecastPipelineError {
    /// Malformed record (missing/unparseable date) or unusable metric configuration
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Fewer distinct calendar days than the trend model needs
    #[error("Insufficient data: need at least {required} daily points, got {actual}")]
    InsufficientData {
        /// Minimum number of daily entries required
        required: usize,
        /// Number of daily entries actually available
        actual: usize,
    },

    /// Numerical failure or non-convergence while fitting the trend model
    #[error("Forecast failed: {0}")]
    Forecast(String),
}

impl ForecastPipelineError {
    /// Create a validation error
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a forecast error
    #[must_use]
    pub fn forecast(message: impl Into<String>) -> Self {
        Self::Forecast(message.into())
    }
}

impl From<ForecastPipelineError> for AppError {
    fn from(error: ForecastPipelineError) -> Self {
        match error {
            ForecastPipelineError::Validation(message) => Self::invalid_input(message),
            ForecastPipelineError::InsufficientData { required, actual } => {
                Self::insufficient_data(format!(
                    "Not enough data points to make a prediction (need {required} days, got {actual})"
                ))
            }
            ForecastPipelineError::Forecast(message) => Self::forecast_failed(message),
        }
    }
}
