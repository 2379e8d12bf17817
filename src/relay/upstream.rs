//! Outbound upstream client.
//!
//! # Responsibilities
//! - Issue exactly one GET per relay request
//! - Parse the upstream body as JSON
//! - Log failure detail before it is translated for the caller
//!
//! # Design Decisions
//! - No retries and no timeout beyond the client's defaults
//! - Redirects follow the client's default policy

use serde_json::Value;

use crate::http::response::RelayError;

/// Thin wrapper around a shared `reqwest::Client`.
///
/// The client keeps its own connection pool; cloning this handle is cheap
/// and all clones share it.
#[derive(Clone, Debug)]
pub struct UpstreamClient {
    client: reqwest::Client,
}

impl UpstreamClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Fetch `url` and parse the response body as JSON.
    ///
    /// Every failure mode (unreachable host, non-2xx status, unparsable
    /// body) is logged here with detail and surfaced as a [`RelayError`].
    pub async fn fetch_json(&self, url: &str) -> Result<Value, RelayError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::error!(url = %url, error = %e, "Upstream fetch failed");
            RelayError::UpstreamUnreachable(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(url = %url, status = %status, "Upstream returned error status");
            return Err(RelayError::UpstreamRejected(format!("status {}", status)));
        }

        response.json::<Value>().await.map_err(|e| {
            tracing::error!(url = %url, error = %e, "Upstream body is not valid JSON");
            RelayError::UpstreamRejected(e.to_string())
        })
    }
}

impl Default for UpstreamClient {
    fn default() -> Self {
        Self::new()
    }
}
