//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (BIND_ADDRESS, API_URL, EXPECTED_TOKEN)
//!     → loader.rs (read once at startup)
//!     → validate_config (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → shared via Arc with every handler
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; handlers never read the environment
//! - All fields have defaults so an empty environment still boots
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;

pub use loader::{load_from_env, ConfigError};
pub use schema::CredentialConfig;
pub use schema::ListenerConfig;
pub use schema::RelayConfig;
pub use schema::UpstreamConfig;
