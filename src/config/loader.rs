//! Configuration loading from the process environment.

use std::env;
use std::net::SocketAddr;

use url::Url;

use crate::config::schema::RelayConfig;

/// Error type for configuration loading.
#[derive(Debug)]
pub struct ConfigError {
    errors: Vec<ValidationError>,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Validation failed: ")?;
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigError {}

/// A single semantic validation failure.
#[derive(Debug, PartialEq)]
pub enum ValidationError {
    InvalidBindAddress(String),
    InvalidUpstreamUrl(String),
    EmptyCredentialStore,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "invalid bind address '{}'", addr)
            }
            ValidationError::InvalidUpstreamUrl(url) => {
                write!(f, "invalid upstream URL '{}'", url)
            }
            ValidationError::EmptyCredentialStore => {
                write!(f, "credential store has no entries")
            }
        }
    }
}

/// Read and validate configuration from the environment.
///
/// Unset variables leave the defaults in place. Empty variables are
/// treated as unset, so `API_URL=""` behaves like a missing variable.
pub fn load_from_env() -> Result<RelayConfig, ConfigError> {
    let mut config = RelayConfig::default();

    if let Some(addr) = read_var("BIND_ADDRESS") {
        config.listener.bind_address = addr;
    }
    config.upstream.api_url = read_var("API_URL");
    config.upstream.expected_token = read_var("EXPECTED_TOKEN");

    validate_config(&config).map_err(|errors| ConfigError { errors })?;

    Ok(config)
}

fn read_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

/// Semantic validation of a loaded configuration.
///
/// Returns all validation errors, not just the first. The per-request
/// `?api_url=` override is deliberately not validated here: a bad override
/// fails at fetch time like any other unreachable upstream.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if let Some(api_url) = config.upstream.api_url.as_deref() {
        match Url::parse(api_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            _ => errors.push(ValidationError::InvalidUpstreamUrl(api_url.to_string())),
        }
    }

    if config.credentials.users.is_empty() {
        errors.push(ValidationError::EmptyCredentialStore);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RelayConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_invalid_bind_address() {
        let mut config = RelayConfig::default();
        config.listener.bind_address = "not-an-address".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidBindAddress("not-an-address".into())]
        );
    }

    #[test]
    fn test_invalid_upstream_url() {
        let mut config = RelayConfig::default();
        config.upstream.api_url = Some("ftp://example.com/data".into());

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidUpstreamUrl(
                "ftp://example.com/data".into()
            )]
        );
    }

    #[test]
    fn test_valid_upstream_url_accepted() {
        let mut config = RelayConfig::default();
        config.upstream.api_url = Some("https://api.example.com/v1/data".into());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_all_errors_reported() {
        let mut config = RelayConfig::default();
        config.listener.bind_address = "nope".into();
        config.upstream.api_url = Some("nope".into());
        config.credentials.users.clear();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
