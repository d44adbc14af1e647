// ABOUTME: Exercise history providers for the Loadcast training load forecaster
// ABOUTME: Provider trait, HTTP implementation of the upstream API, shared client, and payload decoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

#![deny(unsafe_code)]

//! Exercise history providers.
//!
//! The forecasting pipeline never performs I/O itself; the server asks an
//! [`ExerciseHistoryProvider`] for a user's records and hands them to the pipeline.

/// Core provider trait
pub mod core;
/// HTTP provider for the upstream exercise-history API
pub mod exercise_api;
/// Shared HTTP client for upstream calls
pub mod http_client;
/// Upstream response decoding
pub mod payload;

pub use crate::core::ExerciseHistoryProvider;
pub use exercise_api::HttpExerciseProvider;
pub use http_client::{initialize_shared_client, shared_client, ClientTimeouts};
