// ABOUTME: Read-only configuration tables shared by the pipeline and the HTTP layer
// ABOUTME: Maps each muscle-group category to the exercise fields averaged into its load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

/// Muscle-group categories and their metric field lists
pub mod metrics;

pub use metrics::{MetricConfig, MuscleGroup};
