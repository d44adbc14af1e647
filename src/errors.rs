// ABOUTME: Error types re-exported for server code and integration tests
// ABOUTME: AppError carries the HTTP mapping; pipeline and provider errors convert into it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

pub use loadcast_core::errors::{
    AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails, ForecastPipelineError,
    ProviderError, ProviderResult,
};
