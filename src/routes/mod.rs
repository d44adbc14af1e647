// ABOUTME: HTTP route modules for the forecasting service
// ABOUTME: Health checks and muscle-group prediction endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

/// Liveness and readiness endpoints
pub mod health;
/// Training load prediction endpoints
pub mod prediction;

pub use health::HealthRoutes;
pub use prediction::{PredictionRequest, PredictionRoutes, UserId};
