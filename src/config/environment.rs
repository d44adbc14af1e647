// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses bind address, upstream API, and forecaster settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

//! Environment-based configuration, loaded once at startup

use anyhow::{Context, Result};
use loadcast_core::constants::{defaults, env_config, upstream};
use loadcast_intelligence::ForecastConfig;
use loadcast_providers::ClientTimeouts;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Pipeline diagnostics
    Debug,
    /// Intermediate series dumps
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" | "warning" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback to `Development`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    #[must_use]
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        };
        f.write_str(name)
    }
}

/// Upstream exercise-history API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the exercise API
    pub base_url: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: upstream::DEFAULT_BASE_URL.to_owned(),
            timeout_secs: upstream::DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: upstream::DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl UpstreamConfig {
    /// Timeouts for the shared HTTP client
    #[must_use]
    pub const fn client_timeouts(&self) -> ClientTimeouts {
        ClientTimeouts {
            request_secs: self.timeout_secs,
            connect_secs: self.connect_timeout_secs,
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP port
    pub http_port: u16,
    /// Interface to bind
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Upstream exercise API
    pub upstream: UpstreamConfig,
    /// Forecaster settings
    pub forecast: ForecastConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            host: defaults::HOST.to_owned(),
            environment: Environment::default(),
            log_level: LogLevel::default(),
            upstream: UpstreamConfig::default(),
            forecast: ForecastConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable or out-of-range value
    pub fn from_env() -> Result<Self> {
        let config = Self {
            http_port: parse_env(env_config::HTTP_PORT, defaults::HTTP_PORT)?,
            host: env::var(env_config::HOST).unwrap_or_else(|_| defaults::HOST.to_owned()),
            environment: env::var(env_config::ENVIRONMENT)
                .map(|value| Environment::from_str_or_default(&value))
                .unwrap_or_default(),
            log_level: env::var("RUST_LOG")
                .map(|value| LogLevel::from_str_or_default(&value))
                .unwrap_or_default(),
            upstream: UpstreamConfig {
                base_url: env::var(env_config::EXERCISE_API_BASE_URL)
                    .unwrap_or_else(|_| upstream::DEFAULT_BASE_URL.to_owned()),
                timeout_secs: parse_env(
                    env_config::EXERCISE_API_TIMEOUT_SECS,
                    upstream::DEFAULT_TIMEOUT_SECS,
                )?,
                connect_timeout_secs: parse_env(
                    env_config::EXERCISE_API_CONNECT_TIMEOUT_SECS,
                    upstream::DEFAULT_CONNECT_TIMEOUT_SECS,
                )?,
            },
            forecast: ForecastConfig::from_env().context("Invalid forecaster configuration")?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns an error for a zero timeout or an empty upstream URL
    pub fn validate(&self) -> Result<()> {
        if self.upstream.base_url.trim().is_empty() {
            anyhow::bail!("{} must not be empty", env_config::EXERCISE_API_BASE_URL);
        }
        if self.upstream.timeout_secs == 0 || self.upstream.connect_timeout_secs == 0 {
            anyhow::bail!("Upstream timeouts must be at least one second");
        }
        self.forecast
            .validate()
            .context("Invalid forecaster configuration")?;
        Ok(())
    }

    /// `host:port` the server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// One-line configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Loadcast configuration: environment={}, bind={}, log_level={}, upstream={} (timeout {}s, connect {}s), horizon={} days, optimizer max_iterations={}",
            self.environment,
            self.bind_address(),
            self.log_level,
            self.upstream.base_url,
            self.upstream.timeout_secs,
            self.upstream.connect_timeout_secs,
            self.forecast.horizon,
            self.forecast.optimizer.max_iterations,
        )
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {key}: {raw:?}")),
        Err(_) => Ok(default),
    }
}
