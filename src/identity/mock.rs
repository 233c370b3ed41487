use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::{Identity, IdentityProvider};
use crate::{MembershipError, SecretString};

/// In-memory identity provider for tests.
///
/// Credentials are registered up front with [`MockIdentityProvider::register`];
/// anything else is rejected. Clones share the same credential table.
#[derive(Clone)]
pub struct MockIdentityProvider {
    identities: Arc<RwLock<HashMap<String, Identity>>>,
}

impl MockIdentityProvider {
    pub fn new() -> Self {
        Self {
            identities: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Registers `token` as a valid credential for `identity`.
    pub fn register(&self, token: &str, identity: Identity) {
        self.identities
            .write()
            .expect("identity lock poisoned")
            .insert(token.to_owned(), identity);
    }
}

impl Default for MockIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn validate_token(
        &self,
        token: &SecretString,
    ) -> Result<Option<Identity>, MembershipError> {
        let identities = self
            .identities
            .read()
            .map_err(|_| MembershipError::Internal("lock poisoned".into()))?;
        Ok(identities.get(token.expose_secret()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_registered_token_resolves() {
        let provider = MockIdentityProvider::new();
        provider.register(
            "token-a",
            Identity {
                id: "user-1".to_owned(),
                email: "a@example.com".to_owned(),
            },
        );

        let identity = provider
            .validate_token(&SecretString::new("token-a"))
            .await
            .unwrap();
        assert_eq!(identity.unwrap().id, "user-1");
    }

    #[tokio::test]
    async fn test_unknown_token_rejected() {
        let provider = MockIdentityProvider::new();
        let identity = provider
            .validate_token(&SecretString::new("nope"))
            .await
            .unwrap();
        assert!(identity.is_none());
    }
}
