// ABOUTME: Shared test utilities for integration tests
// ABOUTME: In-memory exercise-history provider, record builders, and router setup helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `loadcast_server`

use async_trait::async_trait;
use axum::Router;
use loadcast_core::config::MuscleGroup;
use loadcast_core::errors::{ProviderError, ProviderResult};
use loadcast_core::models::ExerciseRecord;
use loadcast_providers::ExerciseHistoryProvider;
use loadcast_server::{config::ServerConfig, resources::ServerResources, server::build_router};
use std::sync::{Arc, Mutex};

/// Provider returning canned records (or a canned failure) and remembering each call
#[derive(Default)]
pub struct FakeProvider {
    records: Vec<ExerciseRecord>,
    failure: Option<ProviderError>,
    calls: Mutex<Vec<(String, MuscleGroup)>>,
}

impl FakeProvider {
    pub fn with_records(records: Vec<ExerciseRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn failing(failure: ProviderError) -> Self {
        Self {
            failure: Some(failure),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, MuscleGroup)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExerciseHistoryProvider for FakeProvider {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn fetch_records(
        &self,
        user_id: &str,
        group: MuscleGroup,
    ) -> ProviderResult<Vec<ExerciseRecord>> {
        self.calls.lock().unwrap().push((user_id.to_owned(), group));
        match &self.failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(self.records.clone()),
        }
    }
}

/// Record with a single field set
pub fn record(date: &str, field: &str, value: f64) -> ExerciseRecord {
    ExerciseRecord::new(date).with_value(field, Some(value))
}

/// Resources around `provider` with default configuration
pub fn resources_with(provider: Arc<dyn ExerciseHistoryProvider>) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(
        provider,
        Arc::new(ServerConfig::default()),
    ))
}

/// Full application router around `provider`
pub fn router_with(provider: Arc<dyn ExerciseHistoryProvider>) -> Router {
    build_router(resources_with(provider))
}

/// Assert two floats agree within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
