//! Route configuration for the project endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers;
use crate::config::AppConfig;
use crate::projects::{ProjectMemberRepository, ProjectRepository};
use crate::IdentityProvider;

/// Application state for the project routes.
///
/// Holds the identity provider used by the request gate and the row-store
/// repositories the handlers operate on.
#[derive(Clone)]
pub struct AppState<P, R, M> {
    /// External identity provider for bearer validation.
    pub identity: P,
    /// Project repository.
    pub project_repo: R,
    /// Membership repository.
    pub member_repo: M,
    /// Runtime configuration (invite-link base URL, token length).
    pub config: AppConfig,
}

/// Creates the project routes.
///
/// All routes require authentication via bearer token.
///
/// # Routes
///
/// - `POST /` - Create a project (owner membership included)
/// - `GET /` - List the caller's projects
/// - `GET /{id}/invite` - Invite link, owner only
/// - `POST /join/{token}` - Join the project the token belongs to
pub fn project_routes<P, R, M>() -> Router<AppState<P, R, M>>
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
    R: ProjectRepository + Clone + Send + Sync + 'static,
    M: ProjectMemberRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", post(handlers::create_project::<P, R, M>))
        .route("/", get(handlers::list_projects::<P, R, M>))
        .route("/{id}/invite", get(handlers::invite_link::<P, R, M>))
        .route("/join/{token}", post(handlers::join_by_token::<P, R, M>))
}
