// ABOUTME: Server configuration module
// ABOUTME: Environment-driven settings for binding, logging, the upstream API, and forecasting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

/// Environment variable parsing and typed configuration
pub mod environment;

pub use environment::{Environment, LogLevel, ServerConfig, UpstreamConfig};
