//! External identity provider capability.
//!
//! Authentication is delegated to an external service that issues and
//! validates bearer credentials. This module defines the capability seam
//! ([`IdentityProvider`]) the request gate consumes; the service never
//! stores credentials or passwords itself.

mod provider;

#[cfg(feature = "http_identity")]
mod http;

#[cfg(any(test, feature = "mocks"))]
mod mock;

pub use provider::{Identity, IdentityProvider};

#[cfg(feature = "http_identity")]
pub use http::HttpIdentityProvider;

#[cfg(any(test, feature = "mocks"))]
pub use mock::MockIdentityProvider;
