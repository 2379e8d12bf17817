//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay.
//! All types derive Serde traits so a config can also be built from a
//! serialized form in tests.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root configuration for the request relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream target and token gate settings.
    pub upstream: UpstreamConfig,

    /// Static credential mapping for the login endpoint.
    pub credentials: CredentialConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream target and token gate configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Default upstream URL the relay forwards to.
    pub api_url: Option<String>,

    /// Expected value of the `X-API-Token` header.
    /// The gate is active if and only if this is set.
    pub expected_token: Option<String>,

    /// Honor the `?api_url=` per-request override.
    /// Ignored while the token gate is active.
    pub allow_url_override: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            expected_token: None,
            allow_url_override: true,
        }
    }
}

impl UpstreamConfig {
    /// The configured upstream URL, treating empty strings as unset.
    pub fn upstream_url(&self) -> Option<&str> {
        self.api_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Static credential mapping, fixed for the process lifetime.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CredentialConfig {
    /// Username → password pairs. Keys are unique by construction.
    pub users: HashMap<String, String>,
}

impl Default for CredentialConfig {
    fn default() -> Self {
        let mut users = HashMap::new();
        users.insert("admin".to_string(), "admin".to_string());
        Self { users }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Inbound request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}
