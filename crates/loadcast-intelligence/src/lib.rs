// ABOUTME: Training load intelligence for the Loadcast forecaster
// ABOUTME: Record aggregation, daily densification, Holt trend forecasting, and response assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

#![deny(unsafe_code)]

//! # Loadcast Intelligence
//!
//! The forecasting pipeline, kept free of I/O so it can be tested in isolation and
//! run on a blocking thread by the server.
//!
//! ```text
//! records ─► RecordAggregator ─► SeriesDensifier ─► Forecaster ─► ResponseAssembler
//! ```

/// Per-record average load computation
pub mod aggregation;

/// Trend model and the parameter search behind it
pub mod algorithms;

/// History plus forecast response assembly
pub mod assembler;

/// Forecaster and optimizer settings
pub mod config;

/// Date parsing, same-day deduplication, and zero-filling
pub mod densify;

/// Holt forecaster producing dated projections
pub mod forecaster;

/// End-to-end forecasting pipeline
pub mod pipeline;

pub use aggregation::RecordAggregator;
pub use assembler::ResponseAssembler;
pub use config::{ConfigError, ForecastConfig, OptimizerConfig};
pub use densify::{parse_calendar_date, SeriesDensifier};
pub use forecaster::Forecaster;
pub use pipeline::LoadForecastPipeline;
