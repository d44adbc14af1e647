// ABOUTME: Single parameterised forecasting pipeline shared by every muscle-group category
// ABOUTME: Chains aggregation, densification, Holt forecasting, and response assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

//! # Load Forecast Pipeline
//!
//! Synchronous, allocation-local pipeline invoked once per request. Categories differ
//! only in the [`MetricConfig`] passed in, so one pipeline serves them all.
//!
//! ```rust
//! use loadcast_core::config::MetricConfig;
//! use loadcast_core::models::ExerciseRecord;
//! use loadcast_intelligence::LoadForecastPipeline;
//!
//! let records = vec![
//!     ExerciseRecord::new("2024-01-01").with_value("fieldA", Some(10.0)),
//!     ExerciseRecord::new("2024-01-03")
//!         .with_value("fieldA", Some(20.0))
//!         .with_value("fieldB", Some(20.0)),
//! ];
//! let config = MetricConfig::new(["fieldA", "fieldB"]);
//!
//! let result = LoadForecastPipeline::default().forecast(&records, &config).unwrap();
//! assert_eq!(result.dates.len(), 3 + 5);
//! ```

use crate::aggregation::RecordAggregator;
use crate::assembler::ResponseAssembler;
use crate::config::ForecastConfig;
use crate::densify::SeriesDensifier;
use crate::forecaster::Forecaster;
use loadcast_core::config::MetricConfig;
use loadcast_core::errors::ForecastPipelineError;
use loadcast_core::models::{ExerciseRecord, PredictionResult};
use tracing::{debug, enabled, trace, Level};

/// Record aggregation → daily densification → forecasting → response assembly
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadForecastPipeline {
    forecaster: Forecaster,
}

impl LoadForecastPipeline {
    /// Create a pipeline with the given forecaster configuration
    #[must_use]
    pub const fn new(config: ForecastConfig) -> Self {
        Self {
            forecaster: Forecaster::new(config),
        }
    }

    /// Forecaster configuration in use
    #[must_use]
    pub const fn config(&self) -> &ForecastConfig {
        self.forecaster.config()
    }

    /// Turn exercise history into history-plus-forecast arrays.
    ///
    /// # Errors
    ///
    /// - `Validation` for an empty metric configuration, a record without a date,
    ///   or an unparseable date
    /// - `InsufficientData` when fewer than two calendar days are covered
    /// - `Forecast` when the trend model cannot be fitted
    pub fn forecast(
        &self,
        records: &[ExerciseRecord],
        config: &MetricConfig,
    ) -> Result<PredictionResult, ForecastPipelineError> {
        let points = RecordAggregator::aggregate(records, config)?;
        debug!(
            records = records.len(),
            fields = config.len(),
            "Aggregated exercise records"
        );
        trace!(?points, "Aggregated points");

        let series = SeriesDensifier::densify(&points)?;
        if enabled!(Level::TRACE) {
            let days: Vec<_> = series.points().collect();
            trace!(?days, "Daily series");
        }

        let forecast = self.forecaster.forecast(&series)?;
        trace!(?forecast, "Forecast points");

        Ok(ResponseAssembler::assemble(&series, &forecast))
    }
}
