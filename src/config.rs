//! Runtime configuration.
//!
//! Centralizes the settings the service reads at startup: where invite
//! links point, where the row store lives, and which identity service
//! validates bearer credentials.
//!
//! # Example
//!
//! ```rust
//! use huddle::config::AppConfig;
//!
//! // Development defaults
//! let config = AppConfig::default();
//! assert_eq!(config.base_url, "http://localhost:8080");
//!
//! // Or customize
//! let config = AppConfig {
//!     base_url: "https://huddle.example.com".to_owned(),
//!     ..Default::default()
//! };
//! ```

use crate::MembershipError;

/// Main configuration struct for the service.
///
/// Use [`AppConfig::from_env`] in binaries and [`AppConfig::default`]
/// in tests.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Public base URL used when building invite links
    /// (`<base_url>/projects/join/<token>`). No trailing slash.
    pub base_url: String,

    /// Address the HTTP server binds to.
    pub bind_addr: String,

    /// Connection string for the row store.
    pub database_url: String,

    /// Base URL of the external identity service.
    pub identity_url: String,

    /// Length of generated invite tokens (in characters).
    ///
    /// Default is 32 alphanumeric characters (~190 bits of entropy).
    pub token_length: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_owned(),
            bind_addr: "127.0.0.1:8080".to_owned(),
            database_url: "sqlite::memory:".to_owned(),
            identity_url: "http://localhost:9999".to_owned(),
            token_length: crate::crypto::DEFAULT_TOKEN_LENGTH,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables, falling back to the
    /// development defaults for anything unset.
    ///
    /// | Variable | Field |
    /// |----------|-------|
    /// | `APP_BASE_URL` | `base_url` |
    /// | `BIND_ADDR` | `bind_addr` |
    /// | `DATABASE_URL` | `database_url` |
    /// | `IDENTITY_URL` | `identity_url` |
    /// | `INVITE_TOKEN_LENGTH` | `token_length` |
    ///
    /// # Errors
    ///
    /// Returns `MembershipError::ConfigurationError` if
    /// `INVITE_TOKEN_LENGTH` is set but not a positive integer.
    pub fn from_env() -> Result<Self, MembershipError> {
        let defaults = Self::default();

        let token_length = match std::env::var("INVITE_TOKEN_LENGTH") {
            Ok(raw) => raw.parse::<usize>().ok().filter(|n| *n > 0).ok_or_else(|| {
                MembershipError::ConfigurationError(format!(
                    "INVITE_TOKEN_LENGTH must be a positive integer, got \"{raw}\""
                ))
            })?,
            Err(_) => defaults.token_length,
        };

        Ok(Self {
            base_url: std::env::var("APP_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_owned())
                .unwrap_or(defaults.base_url),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            database_url: std::env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            identity_url: std::env::var("IDENTITY_URL")
                .map(|v| v.trim_end_matches('/').to_owned())
                .unwrap_or(defaults.identity_url),
            token_length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.token_length, 32);
    }
}
