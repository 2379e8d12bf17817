//! API token gate for the relay route.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::http::response::RelayError;
use crate::http::server::AppState;

/// Header carrying the caller's API token.
pub const X_API_TOKEN: &str = "x-api-token";

/// Middleware enforcing the configured API token.
///
/// Passes requests straight through when no token is configured. On a
/// mismatch (or a missing header) the request is rejected before any
/// outbound call is made. Comparison is exact string equality.
pub async fn require_api_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, RelayError> {
    let expected = match state.config.upstream.expected_token.as_deref() {
        Some(token) => token,
        None => return Ok(next.run(request).await),
    };

    let supplied = request
        .headers()
        .get(X_API_TOKEN)
        .and_then(|h| h.to_str().ok());

    if supplied == Some(expected) {
        return Ok(next.run(request).await);
    }

    tracing::warn!("Rejected request with invalid or missing API token");
    Err(RelayError::Unauthorized)
}
