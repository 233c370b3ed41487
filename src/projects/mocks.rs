#![allow(clippy::significant_drop_tightening)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use super::repository::{CreateProject, ProjectMemberRepository, ProjectRepository};
use super::types::{Project, ProjectMember};
use crate::MembershipError;

/// In-memory project repository for tests.
///
/// Enforces invite-token uniqueness the way the real store does, reporting
/// a duplicate as `MembershipError::Conflict`.
#[derive(Clone)]
pub struct MockProjectRepository {
    pub projects: Arc<RwLock<HashMap<i64, Project>>>,
    next_id: Arc<AtomicI64>,
}

impl MockProjectRepository {
    pub fn new() -> Self {
        Self {
            projects: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for MockProjectRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectRepository for MockProjectRepository {
    async fn create(&self, data: CreateProject) -> Result<Project, MembershipError> {
        let mut projects = self
            .projects
            .write()
            .map_err(|_| MembershipError::Internal("lock poisoned".into()))?;

        if projects
            .values()
            .any(|p| p.invite_token == data.invite_token)
        {
            return Err(MembershipError::Conflict);
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let project = Project {
            id,
            name: data.name,
            details: data.details,
            owner_id: data.owner_id,
            invite_token: data.invite_token,
            created_at: Utc::now(),
        };
        projects.insert(id, project.clone());

        Ok(project)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Project>, MembershipError> {
        let projects = self
            .projects
            .read()
            .map_err(|_| MembershipError::Internal("lock poisoned".into()))?;
        Ok(projects.get(&id).cloned())
    }

    async fn find_by_invite_token(&self, token: &str) -> Result<Option<Project>, MembershipError> {
        let projects = self
            .projects
            .read()
            .map_err(|_| MembershipError::Internal("lock poisoned".into()))?;
        Ok(projects.values().find(|p| p.invite_token == token).cloned())
    }

    async fn delete(&self, id: i64) -> Result<(), MembershipError> {
        let mut projects = self
            .projects
            .write()
            .map_err(|_| MembershipError::Internal("lock poisoned".into()))?;
        projects.remove(&id);
        Ok(())
    }
}

/// In-memory membership repository for tests.
///
/// The upsert is keyed by `(project_id, user_id)` exactly like the unique
/// constraint in the real store. [`MockProjectMemberRepository::fail_next_upsert`]
/// injects one store failure, for exercising the create-action compensation.
#[derive(Clone)]
pub struct MockProjectMemberRepository {
    pub memberships: Arc<RwLock<HashMap<i64, ProjectMember>>>,
    next_id: Arc<AtomicI64>,
    fail_next: Arc<AtomicBool>,
}

impl MockProjectMemberRepository {
    pub fn new() -> Self {
        Self {
            memberships: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
            fail_next: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Makes the next `upsert` call fail with a store error.
    pub fn fail_next_upsert(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }
}

impl Default for MockProjectMemberRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectMemberRepository for MockProjectMemberRepository {
    async fn upsert(
        &self,
        project_id: i64,
        user_id: &str,
    ) -> Result<ProjectMember, MembershipError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(MembershipError::DatabaseError(
                "injected upsert failure".to_owned(),
            ));
        }

        let mut memberships = self
            .memberships
            .write()
            .map_err(|_| MembershipError::Internal("lock poisoned".into()))?;

        if let Some(existing) = memberships
            .values()
            .find(|m| m.project_id == project_id && m.user_id == user_id)
        {
            return Ok(existing.clone());
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let membership = ProjectMember {
            id,
            project_id,
            user_id: user_id.to_owned(),
            created_at: Utc::now(),
        };
        memberships.insert(id, membership.clone());

        Ok(membership)
    }

    async fn find_by_project_and_user(
        &self,
        project_id: i64,
        user_id: &str,
    ) -> Result<Option<ProjectMember>, MembershipError> {
        let memberships = self
            .memberships
            .read()
            .map_err(|_| MembershipError::Internal("lock poisoned".into()))?;
        Ok(memberships
            .values()
            .find(|m| m.project_id == project_id && m.user_id == user_id)
            .cloned())
    }

    async fn find_by_project(&self, project_id: i64) -> Result<Vec<ProjectMember>, MembershipError> {
        let memberships = self
            .memberships
            .read()
            .map_err(|_| MembershipError::Internal("lock poisoned".into()))?;
        Ok(memberships
            .values()
            .filter(|m| m.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<ProjectMember>, MembershipError> {
        let memberships = self
            .memberships
            .read()
            .map_err(|_| MembershipError::Internal("lock poisoned".into()))?;
        Ok(memberships
            .values()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect())
    }
}
