// ABOUTME: Application constants organized by domain for the Loadcast service
// ABOUTME: Forecast horizon, upstream API defaults, environment variable names, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

//! Application-wide constants

/// Forecasting constants
pub mod forecast {
    /// Number of future daily points projected by default
    pub const DEFAULT_HORIZON_DAYS: usize = 5;

    /// Minimum number of daily entries needed to estimate a trend
    pub const MIN_DAILY_POINTS: usize = 2;

    /// Default iteration budget for the smoothing-parameter search
    pub const DEFAULT_MAX_ITERATIONS: usize = 5000;

    /// Default convergence tolerance on the simplex objective spread (relative)
    pub const DEFAULT_FUNCTION_TOLERANCE: f64 = 1e-10;

    /// Default convergence tolerance on the simplex parameter spread (relative)
    pub const DEFAULT_PARAMETER_TOLERANCE: f64 = 1e-8;
}

/// Upstream exercise-history API defaults
pub mod upstream {
    /// Default base URL of the exercise-history API
    pub const DEFAULT_BASE_URL: &str = "https://entrenat.ddns.net";

    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Default connection timeout in seconds
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Name used for the upstream service in logs and error messages
    pub const SERVICE_NAME: &str = "exercise-history";

    /// Record key holding the calendar date
    pub const DATE_FIELD: &str = "fecha";

    /// Alternative record key accepted for the calendar date
    pub const DATE_FIELD_ALIAS: &str = "date";
}

/// Environment variable names
pub mod env_config {
    /// HTTP port the server binds to
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Host/interface the server binds to
    pub const HOST: &str = "HOST";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Upstream exercise API base URL
    pub const EXERCISE_API_BASE_URL: &str = "EXERCISE_API_BASE_URL";
    /// Upstream request timeout
    pub const EXERCISE_API_TIMEOUT_SECS: &str = "EXERCISE_API_TIMEOUT_SECS";
    /// Upstream connection timeout
    pub const EXERCISE_API_CONNECT_TIMEOUT_SECS: &str = "EXERCISE_API_CONNECT_TIMEOUT_SECS";
    /// Forecast horizon override
    pub const FORECAST_HORIZON: &str = "LOADCAST_FORECAST_HORIZON";
    /// Optimizer iteration budget override
    pub const OPTIMIZER_MAX_ITERATIONS: &str = "LOADCAST_OPTIMIZER_MAX_ITERATIONS";
}

/// Server defaults
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 5000;
    /// Default bind host
    pub const HOST: &str = "127.0.0.1";
}

/// Service names used in structured logging
pub mod service_names {
    /// Name of the prediction server
    pub const LOADCAST_SERVER: &str = "loadcast-server";
}
