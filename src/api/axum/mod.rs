//! Axum transport layer: state, routes, handlers, and the bearer gate.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use error::ApiError;
pub use middleware::{extract_bearer_token, AuthenticatedIdentity};
pub use routes::{project_routes, AppState};
