//! Static credential store.

use std::collections::HashMap;

use crate::config::CredentialConfig;

/// Read-only username → password mapping, fixed at process start.
///
/// Verification is exact string equality on both fields. Passwords are
/// stored in plain text; this mirrors the contract of the login endpoint
/// and is not a hardened credential scheme.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    users: HashMap<String, String>,
}

impl CredentialStore {
    pub fn from_config(config: &CredentialConfig) -> Self {
        Self {
            users: config.users.clone(),
        }
    }

    /// Check a username/password pair. Unknown usernames fail closed.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .map(|stored| stored == password)
            .unwrap_or(false)
    }
}
