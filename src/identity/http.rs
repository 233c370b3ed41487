//! HTTP client for the external identity service.

use std::time::Duration;

use async_trait::async_trait;

use super::{Identity, IdentityProvider};
use crate::{MembershipError, SecretString};

/// Request timeout for identity lookups. A bound here keeps a stalled
/// provider from pinning request handlers.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Identity provider backed by an HTTP identity service.
///
/// Sends `GET <identity_url>/user` with the bearer credential and expects
/// a JSON `{id, email}` body for valid credentials. A 401/403 from the
/// service means the credential is invalid; any other non-success status
/// is a provider failure.
#[derive(Clone)]
pub struct HttpIdentityProvider {
    client: reqwest::Client,
    user_endpoint: String,
}

impl HttpIdentityProvider {
    /// Creates a provider pointing at `identity_url`.
    ///
    /// # Errors
    ///
    /// Returns `MembershipError::ConfigurationError` if the HTTP client
    /// cannot be constructed.
    pub fn new(identity_url: &str) -> Result<Self, MembershipError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MembershipError::ConfigurationError(e.to_string()))?;

        Ok(Self {
            client,
            user_endpoint: format!("{}/user", identity_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "validate_token", skip_all, err)
    )]
    async fn validate_token(
        &self,
        token: &SecretString,
    ) -> Result<Option<Identity>, MembershipError> {
        let response = self
            .client
            .get(&self.user_endpoint)
            .bearer_auth(token.expose_secret())
            .send()
            .await
            .map_err(|e| {
                log::error!(target: "huddle", "msg=\"identity provider unreachable\", error=\"{e}\"");
                MembershipError::Internal(format!("identity provider unreachable: {e}"))
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Ok(None);
        }

        if !status.is_success() {
            log::error!(
                target: "huddle",
                "msg=\"identity provider error\", status={}",
                status.as_u16()
            );
            return Err(MembershipError::Internal(format!(
                "identity provider returned status {status}"
            )));
        }

        let identity = response.json::<Identity>().await.map_err(|e| {
            log::error!(target: "huddle", "msg=\"identity provider sent malformed body\", error=\"{e}\"");
            MembershipError::Internal(format!("malformed identity response: {e}"))
        })?;

        Ok(Some(identity))
    }
}
