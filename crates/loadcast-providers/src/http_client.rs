// ABOUTME: Shared HTTP client with connection pooling for upstream exercise API calls
// ABOUTME: Process-wide singleton whose timeouts are configured once at server startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

use loadcast_core::constants::upstream::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS, SERVICE_NAME,
};
use loadcast_core::errors::{ProviderError, ProviderResult};
use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::warn;

const USER_AGENT: &str = concat!("loadcast/", env!("CARGO_PKG_VERSION"));

/// Request and connect timeouts for upstream calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientTimeouts {
    /// Whole-request timeout in seconds
    pub request_secs: u64,
    /// Connection establishment timeout in seconds
    pub connect_secs: u64,
}

impl Default for ClientTimeouts {
    fn default() -> Self {
        Self {
            request_secs: DEFAULT_TIMEOUT_SECS,
            connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

static CLIENT_TIMEOUTS: OnceLock<ClientTimeouts> = OnceLock::new();

static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Configure the shared client's timeouts.
///
/// Call once at startup, before the first [`shared_client`] call. Returns `false`
/// if timeouts were already configured, in which case the call has no effect.
pub fn initialize_shared_client(timeouts: ClientTimeouts) -> bool {
    CLIENT_TIMEOUTS.set(timeouts).is_ok()
}

/// Build a standalone client with the given timeouts
///
/// # Errors
///
/// Returns `ProviderError::ConfigurationError` if the TLS backend cannot be initialised
pub fn build_client(timeouts: ClientTimeouts) -> ProviderResult<Client> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(timeouts.request_secs))
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| ProviderError::ConfigurationError {
            provider: SERVICE_NAME.to_owned(),
            details: format!("failed to build HTTP client: {e}"),
        })
}

/// Pooled client shared by every provider.
///
/// Falls back to default timeouts if [`initialize_shared_client`] was never called.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let timeouts = CLIENT_TIMEOUTS.get().copied().unwrap_or_default();
        client_or_fallback(build_client(timeouts), timeouts)
    })
}

/// Use the built client, or warn and fall back to reqwest's defaults
fn client_or_fallback(built: ProviderResult<Client>, timeouts: ClientTimeouts) -> Client {
    built.unwrap_or_else(|e| {
        warn!(
            error = %e,
            request_secs = timeouts.request_secs,
            connect_secs = timeouts.connect_secs,
            "Falling back to a default HTTP client without configured timeouts"
        );
        Client::new()
    })
}
