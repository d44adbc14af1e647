// ABOUTME: Forecaster configuration: horizon length and simplex search tolerances
// ABOUTME: Defaults match the service contract, with environment overrides validated at load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

use super::ConfigError;
use loadcast_core::constants::{env_config, forecast};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Settings for the derivative-free search that estimates smoothing parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Maximum simplex iterations before the fit is declared non-convergent
    pub max_iterations: usize,
    /// Relative tolerance on the spread of objective values across the simplex
    pub function_tolerance: f64,
    /// Relative tolerance on the spread of parameter values across the simplex
    pub parameter_tolerance: f64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_iterations: forecast::DEFAULT_MAX_ITERATIONS,
            function_tolerance: forecast::DEFAULT_FUNCTION_TOLERANCE,
            parameter_tolerance: forecast::DEFAULT_PARAMETER_TOLERANCE,
        }
    }
}

/// Forecaster configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Number of future days to project
    pub horizon: usize,
    /// Parameter search settings
    pub optimizer: OptimizerConfig,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon: forecast::DEFAULT_HORIZON_DAYS,
            optimizer: OptimizerConfig::default(),
        }
    }
}

impl ForecastConfig {
    /// Load configuration from environment variables, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            horizon: env_or(env_config::FORECAST_HORIZON, defaults.horizon)?,
            optimizer: OptimizerConfig {
                max_iterations: env_or(
                    env_config::OPTIMIZER_MAX_ITERATIONS,
                    defaults.optimizer.max_iterations,
                )?,
                ..defaults.optimizer
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the horizon or iteration budget is zero, or a tolerance
    /// is not a positive finite number
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.horizon == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "forecast horizon must be at least one day",
            ));
        }
        if self.optimizer.max_iterations == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "optimizer iteration budget must be positive",
            ));
        }
        let tolerances = [
            self.optimizer.function_tolerance,
            self.optimizer.parameter_tolerance,
        ];
        if tolerances.iter().any(|t| !t.is_finite() || *t <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "optimizer tolerances must be positive and finite",
            ));
        }
        Ok(())
    }
}

fn env_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse { key, value: raw }),
        Err(_) => Ok(default),
    }
}
