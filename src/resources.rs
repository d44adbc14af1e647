// ABOUTME: Shared server resources handed to every route handler
// ABOUTME: Holds the exercise-history provider, the forecasting pipeline, and the loaded configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

use crate::config::ServerConfig;
use loadcast_core::errors::ProviderResult;
use loadcast_intelligence::LoadForecastPipeline;
use loadcast_providers::{ExerciseHistoryProvider, HttpExerciseProvider};
use std::sync::Arc;

/// Dependencies shared across requests
pub struct ServerResources {
    /// Source of exercise history
    pub provider: Arc<dyn ExerciseHistoryProvider>,
    /// Forecasting pipeline configured from `config.forecast`
    pub pipeline: LoadForecastPipeline,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Assemble resources around an explicit provider
    #[must_use]
    pub fn new(provider: Arc<dyn ExerciseHistoryProvider>, config: Arc<ServerConfig>) -> Self {
        Self {
            provider,
            pipeline: LoadForecastPipeline::new(config.forecast),
            config,
        }
    }

    /// Resources backed by the upstream HTTP API named in `config`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the upstream base URL is invalid
    pub fn from_config(config: Arc<ServerConfig>) -> ProviderResult<Self> {
        let provider = HttpExerciseProvider::new(&config.upstream.base_url)?;
        Ok(Self::new(Arc::new(provider), config))
    }
}
