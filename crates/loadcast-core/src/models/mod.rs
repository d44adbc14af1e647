// ABOUTME: Core data models flowing through the forecasting pipeline
// ABOUTME: Raw exercise records, aggregated points, dense daily series, and prediction output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

//! # Data Models
//!
//! Every entity here lives for a single request: records arrive from the provider,
//! are reduced to [`AggregatedPoint`]s, densified into a [`DailySeries`], extended
//! with [`ForecastPoint`]s, and finally flattened into a [`PredictionResult`].

mod exercise;
mod series;

pub use exercise::ExerciseRecord;
pub use series::{AggregatedPoint, DailyPoint, DailySeries, ForecastPoint, PredictionResult};
