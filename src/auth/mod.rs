//! Caller authentication.
//!
//! Two independent checks live here: the `X-API-Token` gate in front of
//! the relay route, and the static credential check behind `POST /login`.
//! Neither issues sessions or tokens; both are stateless per request.

pub mod credentials;
pub mod login;
pub mod token;

pub use credentials::CredentialStore;
pub use login::login;
pub use token::require_api_token;
