//! Authenticated request gate.

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use super::error::ApiError;
use super::routes::AppState;
use crate::{Identity, IdentityProvider, MembershipError, SecretString};

/// Resolves the `Authorization: Bearer` credential to an [`Identity`] via
/// the external provider and hands it to the handler as a typed value.
///
/// Missing header, malformed header, rejected credential and provider
/// failure all short-circuit with the same 401 rejection; handlers never
/// see which sub-condition fired.
#[derive(Debug, Clone)]
pub struct AuthenticatedIdentity<P>
where
    P: IdentityProvider,
{
    identity: Identity,
    _marker: PhantomData<P>,
}

impl<P> AuthenticatedIdentity<P>
where
    P: IdentityProvider,
{
    /// Returns the inner identity, consuming the wrapper.
    pub fn into_inner(self) -> Identity {
        self.identity
    }

    /// Returns a reference to the resolved identity.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }
}

pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()
        .and_then(|auth| auth.strip_prefix("Bearer "))
        .map(ToOwned::to_owned)
}

impl<P, R, M> FromRequestParts<AppState<P, R, M>> for AuthenticatedIdentity<P>
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
    R: Clone + Send + Sync + 'static,
    M: Clone + Send + Sync + 'static,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<P, R, M>,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)
            .ok_or(ApiError(MembershipError::Unauthorized))?;

        let identity = state
            .identity
            .validate_token(&SecretString::new(token))
            .await
            .map_err(|err| {
                log::warn!(target: "huddle", "msg=\"identity validation failed\", error=\"{err}\"");
                ApiError(MembershipError::Unauthorized)
            })?
            .ok_or(ApiError(MembershipError::Unauthorized))?;

        Ok(AuthenticatedIdentity {
            identity,
            _marker: PhantomData,
        })
    }
}
