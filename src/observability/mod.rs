//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging through `tracing`; handlers never print directly
//! - Upstream failure detail stays in server-side logs; callers only ever
//!   see a short generic message
//! - Request IDs (http::request) tie log lines to individual requests

pub mod logging;
