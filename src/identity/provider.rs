use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{MembershipError, SecretString};

/// A user resolved by the external identity provider.
///
/// The id is an opaque string owned by the provider; this service only
/// ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Provider-assigned user id.
    pub id: String,
    /// Email the provider has on record.
    pub email: String,
}

/// Capability for validating bearer credentials.
///
/// Implementations resolve a credential to the identity it was issued for.
/// `Ok(None)` means the provider rejected the credential (unknown, expired,
/// malformed); `Err` means the provider could not be consulted at all. The
/// request gate treats both the same way and rejects the request.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn validate_token(
        &self,
        token: &SecretString,
    ) -> Result<Option<Identity>, MembershipError>;
}
