// ABOUTME: Numerical algorithms backing the forecaster
// ABOUTME: Holt linear trend smoothing and the simplex search that fits its parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

/// Additive Holt linear trend model
pub mod holt;

/// Nelder-Mead simplex minimiser
pub mod nelder_mead;

pub use holt::{HoltLinearTrend, HoltParameters};
pub use nelder_mead::{Minimum, NelderMead, OptimizationError};
