// ABOUTME: Structured error types for upstream exercise-history provider operations
// ABOUTME: Kept separate from pipeline errors so fetch failures are never mistaken for bad input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

use super::AppError;
use crate::constants::upstream;
use thiserror::Error;

/// Failures while fetching exercise history from the upstream provider
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// Transport-level failure (DNS, connect, timeout, TLS)
    #[error("Network error calling {provider}: {message}")]
    Network {
        /// Provider name
        provider: String,
        /// Underlying error description
        message: String,
    },

    /// Upstream answered with a non-success status
    #[error("{provider} API request failed with status {status_code}: {message}")]
    ApiError {
        /// Provider name
        provider: String,
        /// HTTP status returned by the upstream
        status_code: u16,
        /// Response body or reason
        message: String,
    },

    /// Upstream answered 2xx but the body is not the expected shape
    #[error("Malformed payload from {provider}: {message}")]
    MalformedPayload {
        /// Provider name
        provider: String,
        /// What was wrong with the payload
        message: String,
    },

    /// Provider could not be constructed from its configuration
    #[error("Provider configuration error for {provider}: {details}")]
    ConfigurationError {
        /// Provider name
        provider: String,
        /// Details about the configuration problem
        details: String,
    },
}

impl ProviderError {
    /// Name of the provider that failed
    #[must_use]
    pub fn provider(&self) -> &str {
        match self {
            Self::Network { provider, .. }
            | Self::ApiError { provider, .. }
            | Self::MalformedPayload { provider, .. }
            | Self::ConfigurationError { provider, .. } => provider,
        }
    }
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        match &error {
            ProviderError::ConfigurationError { .. } => Self::config(error.to_string()),
            _ => Self::external_service(
                upstream::SERVICE_NAME,
                format!("Failed to fetch data from exercises API: {error}"),
            ),
        }
    }
}
