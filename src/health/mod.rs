//! Liveness signal.
//!
//! # Design Decisions
//! - No dependency checks: the endpoint reports process liveness only
//! - Upstream reachability and token state never affect the result

use axum::http::StatusCode;

/// `GET /healthz`. Always 200 with an empty body.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
