//! Relay request handling.
//!
//! # Responsibilities
//! - Resolve the target URL (per-request override, then configured default)
//! - Delegate the outbound fetch to the upstream client
//! - Relay the parsed JSON body verbatim on success

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::config::UpstreamConfig;
use crate::http::response::RelayError;
use crate::http::server::AppState;

/// Query parameters accepted by the relay route.
#[derive(Debug, Default, Deserialize)]
pub struct RelayQuery {
    /// Overrides the configured upstream URL on the open variant.
    #[serde(default)]
    pub api_url: Option<String>,
}

/// Main relay handler.
///
/// Resolves the target URL, performs one outbound GET, and relays the
/// JSON body. The token gate has already run by the time this executes.
pub async fn relay_handler(
    State(state): State<AppState>,
    Query(query): Query<RelayQuery>,
) -> Result<Json<Value>, RelayError> {
    let target = resolve_target(&state.config.upstream, query.api_url.as_deref())?;

    tracing::info!(
        target = %target,
        "Fetching upstream data"
    );

    let body = state.upstream.fetch_json(&target).await?;
    Ok(Json(body))
}

/// Resolve the upstream URL for one request.
///
/// The per-request override is honored only while the token gate is off:
/// the gated variant pins the upstream to process-wide configuration.
/// Empty strings count as absent, for the override and the default alike.
fn resolve_target(
    config: &UpstreamConfig,
    override_url: Option<&str>,
) -> Result<String, RelayError> {
    if config.expected_token.is_none() && config.allow_url_override {
        if let Some(url) = override_url.filter(|url| !url.is_empty()) {
            return Ok(url.to_string());
        }
    }

    config
        .upstream_url()
        .map(str::to_string)
        .ok_or(RelayError::MissingConfiguration)
}
