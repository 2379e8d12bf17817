//! Login endpoint backed by the static credential store.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::http::server::AppState;

/// Body of a login request. Both fields default to empty strings so a
/// partial body degrades to a failed check instead of a parse rejection.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// `POST /login`. Stateless credential check; no session, no token.
pub async fn login(State(state): State<AppState>, body: Bytes) -> Response {
    // A missing or malformed body counts as empty credentials and takes
    // the same failure path as a wrong password.
    let request: LoginRequest = serde_json::from_slice(&body).unwrap_or_default();

    if state
        .credentials
        .verify(&request.username, &request.password)
    {
        tracing::info!(username = %request.username, "Login successful");
        (
            StatusCode::OK,
            Json(json!({"message": "Login successful!"})),
        )
            .into_response()
    } else {
        tracing::warn!(username = %request.username, "Login rejected");
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Invalid credentials"})),
        )
            .into_response()
    }
}
