// ABOUTME: Core types and constants for the Loadcast training load forecaster
// ABOUTME: Foundation crate with error handling, exercise models, metric tables, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

#![deny(unsafe_code)]

//! # Loadcast Core
//!
//! Foundation crate providing shared types and constants for the Loadcast
//! forecasting service. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and domain-specific errors
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Exercise records and the series types flowing through the pipeline
//! - **config**: Muscle-group categories and the metric fields averaged for each

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Core data models (exercise records, daily series, forecasts)
pub mod models;

/// Muscle-group metric configuration
pub mod config;
