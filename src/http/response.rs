//! Response envelopes for failed requests.
//!
//! # Responsibilities
//! - Map relay failures to appropriate HTTP status codes
//! - Keep caller-visible bodies short and generic
//!
//! # Design Decisions
//! - Upstream detail (DNS errors, status codes, parse errors) is logged
//!   server-side and never surfaced to the caller
//! - Non-2xx upstream statuses and network failures collapse to one 502

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures a relay request can terminate with. None are retried.
#[derive(Debug, Error)]
pub enum RelayError {
    /// No upstream URL was configured or supplied with the request.
    #[error("no upstream URL configured or supplied")]
    MissingConfiguration,

    /// The caller's API token did not match the configured one.
    #[error("invalid or missing API token")]
    Unauthorized,

    /// The upstream could not be reached (DNS, refused, timeout).
    #[error("upstream unreachable: {0}")]
    UpstreamUnreachable(String),

    /// The upstream answered with a non-2xx status or an unparsable body.
    #[error("upstream rejected: {0}")]
    UpstreamRejected(String),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match self {
            RelayError::MissingConfiguration => (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Missing API URL"})),
            )
                .into_response(),
            RelayError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "Invalid or missing API token").into_response()
            }
            RelayError::UpstreamUnreachable(_) | RelayError::UpstreamRejected(_) => {
                (StatusCode::BAD_GATEWAY, "Failed to fetch API data").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            RelayError::MissingConfiguration.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RelayError::Unauthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            RelayError::UpstreamUnreachable("refused".into())
                .into_response()
                .status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            RelayError::UpstreamRejected("status 500".into())
                .into_response()
                .status(),
            StatusCode::BAD_GATEWAY
        );
    }
}
