// ABOUTME: Core provider trait abstracting where exercise history comes from
// ABOUTME: Implemented by the HTTP provider and by in-memory fakes in tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

use async_trait::async_trait;
use loadcast_core::config::MuscleGroup;
use loadcast_core::errors::ProviderResult;
use loadcast_core::models::ExerciseRecord;

/// Source of a user's exercise history for one muscle-group category
#[async_trait]
pub trait ExerciseHistoryProvider: Send + Sync {
    /// Provider name used in logs
    fn name(&self) -> &'static str;

    /// Fetch every record the user has logged for `group`, in upstream order.
    ///
    /// Records may be unsorted, share dates, and contain null fields.
    ///
    /// # Errors
    ///
    /// Returns a `ProviderError` when the upstream is unreachable, answers with a
    /// non-success status, or sends a body that cannot be decoded
    async fn fetch_records(
        &self,
        user_id: &str,
        group: MuscleGroup,
    ) -> ProviderResult<Vec<ExerciseRecord>>;
}
