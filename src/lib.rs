// ABOUTME: Loadcast server library: configuration, logging, middleware, routes, and server bootstrap
// ABOUTME: Serves short-horizon training load forecasts computed from upstream exercise history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

#![deny(unsafe_code)]

//! # Loadcast Server
//!
//! HTTP front end for the training load forecaster. A request names a user and a
//! muscle-group category; the server fetches that user's exercise history, reduces
//! it to a daily average-load series, and returns the history followed by a
//! five-day Holt linear-trend forecast.
//!
//! The forecasting itself lives in `loadcast-intelligence`, the upstream client in
//! `loadcast-providers`, and shared types in `loadcast-core`.

/// Environment configuration
pub mod config;

/// Error re-exports
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Shared handler dependencies
pub mod resources;

/// HTTP routes
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;
