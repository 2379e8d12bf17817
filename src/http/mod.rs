//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, routing)
//!     → request.rs (tag with x-request-id)
//!     → relay / auth / health handlers
//!     → response.rs (map failures to status codes and envelopes)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use response::RelayError;
pub use server::HttpServer;
