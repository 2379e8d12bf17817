//! Upstream fetch-and-translate subsystem.
//!
//! # Data Flow
//! ```text
//! GET /
//!     → token gate (auth::token, active when a token is configured)
//!     → handler.rs (resolve the target URL)
//!     → upstream.rs (single outbound GET, JSON parse)
//!     → 200 with the upstream body, or a translated error
//! ```
//!
//! # Design Decisions
//! - One outbound call per request; no retries, caching, or breakers
//! - Non-2xx upstream statuses and network failures both surface as 502
//! - The upstream's own status code is never propagated to the caller

pub mod handler;
pub mod upstream;

pub use handler::relay_handler;
pub use upstream::UpstreamClient;
