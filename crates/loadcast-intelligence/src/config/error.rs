// ABOUTME: Configuration error types for forecaster settings validation
// ABOUTME: Defines error variants for out-of-range values and unparseable overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

//! Configuration error types for forecaster settings validation.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable present but not parseable
    #[error("Parse error for {key}: {value:?}")]
    Parse {
        /// Environment variable name
        key: &'static str,
        /// Raw value that failed to parse
        value: String,
    },

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}
