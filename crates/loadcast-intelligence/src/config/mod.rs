// ABOUTME: Configuration module for loadcast-intelligence crate
// ABOUTME: Forecast horizon and smoothing-parameter search settings with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

/// Configuration error types
pub mod error;

/// Forecaster settings
pub mod forecast;

pub use error::ConfigError;
pub use forecast::{ForecastConfig, OptimizerConfig};
