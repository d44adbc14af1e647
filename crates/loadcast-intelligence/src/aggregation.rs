// ABOUTME: Record aggregation reducing each exercise record to a single average load value
// ABOUTME: Missing and null fields count as zero and always stay in the denominator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

use loadcast_core::config::MetricConfig;
use loadcast_core::errors::ForecastPipelineError;
use loadcast_core::models::{AggregatedPoint, ExerciseRecord};

/// Reduces exercise records to per-record average load
pub struct RecordAggregator;

impl RecordAggregator {
    /// Produce one [`AggregatedPoint`] per record, preserving input order and duplicates.
    ///
    /// `average_load = sum(field values, null or absent as 0) / config.len()`
    ///
    /// # Errors
    ///
    /// Returns `ForecastPipelineError::Validation` if the metric configuration is
    /// empty or any record has no date
    pub fn aggregate(
        records: &[ExerciseRecord],
        config: &MetricConfig,
    ) -> Result<Vec<AggregatedPoint>, ForecastPipelineError> {
        if config.is_empty() {
            return Err(ForecastPipelineError::validation(
                "metric configuration must name at least one exercise field",
            ));
        }
        let denominator = config.len() as f64;

        records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let date = record.date.as_ref().ok_or_else(|| {
                    ForecastPipelineError::validation(format!("record {index} has no date"))
                })?;
                let total: f64 = config
                    .fields()
                    .iter()
                    .map(|field| record.value_or_zero(field))
                    .sum();

                Ok(AggregatedPoint {
                    date: date.clone(),
                    average_load: total / denominator,
                })
            })
            .collect()
    }
}
