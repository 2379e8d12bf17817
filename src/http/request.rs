//! Request identification.
//!
//! # Responsibilities
//! - Tag every inbound request with an `x-request-id` header (UUID v4)
//! - Preserve a caller-supplied request ID if one is already present
//!
//! # Design Decisions
//! - The ID is added as early as possible so every log line can carry it
//! - Response-side propagation is handled by tower-http's propagate layer

use std::task::{Context, Poll};

use axum::{
    body::Body,
    http::{HeaderValue, Request},
};
use tower::{Layer, Service};
use uuid::Uuid;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Layer that applies the [`RequestId`] middleware.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestId<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestId { inner }
    }
}

/// Middleware that inserts a generated `x-request-id` header.
#[derive(Clone, Debug)]
pub struct RequestId<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for RequestId<S>
where
    S: Service<Request<Body>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        if !req.headers().contains_key(X_REQUEST_ID) {
            let id = Uuid::new_v4().to_string();
            if let Ok(value) = HeaderValue::from_str(&id) {
                req.headers_mut().insert(X_REQUEST_ID, value);
            }
        }
        self.inner.call(req)
    }
}
