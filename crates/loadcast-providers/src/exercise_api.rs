// ABOUTME: HTTP provider fetching exercise history from the upstream exercise API
// ABOUTME: GET {base}/muscle/{group}/list/{user}, mapping transport, status, and shape failures to ProviderError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

use crate::core::ExerciseHistoryProvider;
use crate::http_client::shared_client;
use crate::payload::decode_records;
use async_trait::async_trait;
use loadcast_core::config::MuscleGroup;
use loadcast_core::constants::upstream::SERVICE_NAME;
use loadcast_core::errors::{ProviderError, ProviderResult};
use loadcast_core::models::ExerciseRecord;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

/// Longest slice of an error body copied into `ProviderError::ApiError`
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Exercise-history provider backed by the upstream REST API
#[derive(Debug, Clone)]
pub struct HttpExerciseProvider {
    base_url: Url,
    client: Client,
}

impl HttpExerciseProvider {
    /// Create a provider for `base_url` using the shared pooled client
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::ConfigurationError` if `base_url` is not an absolute
    /// http(s) URL
    pub fn new(base_url: &str) -> ProviderResult<Self> {
        Self::with_client(base_url, shared_client().clone())
    }

    /// Create a provider with an explicit client
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::ConfigurationError` if `base_url` is not an absolute
    /// http(s) URL
    pub fn with_client(base_url: &str, client: Client) -> ProviderResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| config_error(format!("invalid base URL {base_url:?}: {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(config_error(format!(
                "base URL must be an http(s) URL, got {base_url}"
            )));
        }
        Ok(Self { base_url, client })
    }

    /// Base URL requests are resolved against
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Endpoint listing `user_id`'s records for `group`; `user_id` is percent-encoded
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::ConfigurationError` if the base URL cannot take path segments
    pub fn records_url(&self, user_id: &str, group: MuscleGroup) -> ProviderResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| config_error("base URL cannot take path segments"))?
            .pop_if_empty()
            .extend(["muscle", group.as_str(), "list", user_id]);
        Ok(url)
    }
}

fn config_error(details: impl Into<String>) -> ProviderError {
    ProviderError::ConfigurationError {
        provider: SERVICE_NAME.to_owned(),
        details: details.into(),
    }
}

fn network_error(error: &reqwest::Error) -> ProviderError {
    ProviderError::Network {
        provider: SERVICE_NAME.to_owned(),
        message: error.to_string(),
    }
}

#[async_trait]
impl ExerciseHistoryProvider for HttpExerciseProvider {
    fn name(&self) -> &'static str {
        SERVICE_NAME
    }

    async fn fetch_records(
        &self,
        user_id: &str,
        group: MuscleGroup,
    ) -> ProviderResult<Vec<ExerciseRecord>> {
        let url = self.records_url(user_id, group)?;
        debug!(%url, %group, "Fetching exercise history");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| network_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), %group, "Exercise API returned an error status");
            return Err(ProviderError::ApiError {
                provider: SERVICE_NAME.to_owned(),
                status_code: status.as_u16(),
                message: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let body = response.bytes().await.map_err(|e| network_error(&e))?;
        let records = decode_records(&body)?;
        debug!(records = records.len(), %group, "Fetched exercise history");
        Ok(records)
    }
}
