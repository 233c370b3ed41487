//! Project membership with invite-token joins.
//!
//! Users authenticated by an external identity provider create projects,
//! hand out invite links, and join projects by presenting the embedded
//! token. Storage and identity both sit behind trait seams; the crate
//! ships a `SQLite` row store and an HTTP identity client, plus in-memory
//! mocks for tests.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`projects`] | Membership core: types, repositories, actions |
//! | [`identity`] | External identity provider capability |
//! | [`api`] | HTTP/JSON boundary (axum) |
//! | [`sqlite`] | `SQLite` repository implementations |
//! | [`crypto`] | Invite-token generation |
//! | [`config`] | Runtime configuration |

pub mod api;
pub mod config;
pub mod crypto;
pub mod identity;
pub mod projects;
pub mod secret;
#[cfg(feature = "sqlx_sqlite")]
pub mod sqlite;
pub mod validators;

use std::fmt;

pub use identity::{Identity, IdentityProvider};
pub use secret::SecretString;
use validators::ValidationError;

/// Crate-wide error type.
///
/// Every boundary operation maps collaborator failures into one of these
/// variants; the HTTP layer turns them into status codes.
#[derive(Debug, Clone, PartialEq)]
pub enum MembershipError {
    /// Bad input from the caller (empty project name, oversized fields).
    Validation(ValidationError),
    /// Missing, malformed, or rejected bearer credential. The triggering
    /// sub-condition is deliberately not distinguished.
    Unauthorized,
    /// Authenticated but not allowed (non-owner asking for an invite link).
    Forbidden,
    /// Unknown invite token or row.
    NotFound,
    /// Store uniqueness violation. Consumed internally by the create
    /// retry; surfaces as a store error if the retry loses again.
    Conflict,
    /// Backing-store failure.
    DatabaseError(String),
    /// Bad or missing runtime configuration.
    ConfigurationError(String),
    /// Invariant breakage inside the process (poisoned lock etc).
    Internal(String),
}

impl std::error::Error for MembershipError {}

impl fmt::Display for MembershipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MembershipError::Validation(e) => write!(f, "{e}"),
            MembershipError::Unauthorized => write!(f, "Missing or invalid token"),
            MembershipError::Forbidden => write!(f, "Forbidden"),
            MembershipError::NotFound => write!(f, "Not found"),
            MembershipError::Conflict => write!(f, "Conflict"),
            MembershipError::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            MembershipError::ConfigurationError(msg) => write!(f, "Configuration error: {msg}"),
            MembershipError::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl From<ValidationError> for MembershipError {
    fn from(err: ValidationError) -> Self {
        MembershipError::Validation(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_forbidden() {
        assert_eq!(MembershipError::Forbidden.to_string(), "Forbidden");
    }

    #[test]
    fn test_display_unauthorized() {
        assert_eq!(
            MembershipError::Unauthorized.to_string(),
            "Missing or invalid token"
        );
    }

    #[test]
    fn test_validation_error_converts() {
        let err: MembershipError = ValidationError::NameEmpty.into();
        assert!(matches!(err, MembershipError::Validation(_)));
    }
}
