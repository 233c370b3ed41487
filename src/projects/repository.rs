use async_trait::async_trait;

use super::types::{Project, ProjectMember};
use crate::MembershipError;

#[derive(Debug, Clone)]
pub struct CreateProject {
    pub name: String,
    pub details: Option<String>,
    pub owner_id: String,
    pub invite_token: String,
}

/// Row-store seam for project rows.
///
/// `create` must report an invite-token uniqueness violation as
/// `MembershipError::Conflict` so callers can retry with a fresh token.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, data: CreateProject) -> Result<Project, MembershipError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Project>, MembershipError>;
    async fn find_by_invite_token(&self, token: &str)
        -> Result<Option<Project>, MembershipError>;
    /// Removes a project row. Only used to compensate a failed owner
    /// membership write; no API operation deletes projects.
    async fn delete(&self, id: i64) -> Result<(), MembershipError>;
}

/// Row-store seam for membership rows.
#[async_trait]
pub trait ProjectMemberRepository: Send + Sync {
    /// Idempotent insert keyed by `(project_id, user_id)`; joining twice
    /// returns the existing row.
    async fn upsert(&self, project_id: i64, user_id: &str)
        -> Result<ProjectMember, MembershipError>;
    async fn find_by_project_and_user(
        &self,
        project_id: i64,
        user_id: &str,
    ) -> Result<Option<ProjectMember>, MembershipError>;
    async fn find_by_project(&self, project_id: i64)
        -> Result<Vec<ProjectMember>, MembershipError>;
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<ProjectMember>, MembershipError>;
}
