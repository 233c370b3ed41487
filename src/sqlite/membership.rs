//! `SQLite` implementation of [`ProjectMemberRepository`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use crate::projects::{ProjectMember, ProjectMemberRepository};
use crate::MembershipError;

/// `SQLite`-backed project membership repository.
#[derive(Clone)]
pub struct SqliteProjectMemberRepository {
    pool: SqlitePool,
}

impl SqliteProjectMemberRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct MemberRecord {
    id: i64,
    project_id: i64,
    user_id: String,
    created_at: DateTime<Utc>,
}

impl From<MemberRecord> for ProjectMember {
    fn from(row: MemberRecord) -> Self {
        ProjectMember {
            id: row.id,
            project_id: row.project_id,
            user_id: row.user_id,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl ProjectMemberRepository for SqliteProjectMemberRepository {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn upsert(
        &self,
        project_id: i64,
        user_id: &str,
    ) -> Result<ProjectMember, MembershipError> {
        // The no-op DO UPDATE makes RETURNING yield the existing row on
        // conflict; created_at stays untouched either way.
        let row: MemberRecord = sqlx::query_as(
            r"
            INSERT INTO project_members (project_id, user_id)
            VALUES (?, ?)
            ON CONFLICT(project_id, user_id) DO UPDATE SET user_id = excluded.user_id
            RETURNING id, project_id, user_id, created_at
            ",
        )
        .bind(project_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            log::error!(target: "huddle", "msg=\"database error\", operation=\"upsert_membership\", error=\"{e}\"");
            MembershipError::DatabaseError(e.to_string())
        })?;

        Ok(row.into())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn find_by_project_and_user(
        &self,
        project_id: i64,
        user_id: &str,
    ) -> Result<Option<ProjectMember>, MembershipError> {
        let row: Option<MemberRecord> = sqlx::query_as(
            "SELECT id, project_id, user_id, created_at FROM project_members WHERE project_id = ? AND user_id = ?",
        )
        .bind(project_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log::error!(target: "huddle", "msg=\"database error\", operation=\"find_membership_by_project_and_user\", error=\"{e}\"");
            MembershipError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn find_by_project(
        &self,
        project_id: i64,
    ) -> Result<Vec<ProjectMember>, MembershipError> {
        let rows: Vec<MemberRecord> = sqlx::query_as(
            "SELECT id, project_id, user_id, created_at FROM project_members WHERE project_id = ? ORDER BY created_at ASC",
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            log::error!(target: "huddle", "msg=\"database error\", operation=\"find_memberships_by_project\", error=\"{e}\"");
            MembershipError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<ProjectMember>, MembershipError> {
        let rows: Vec<MemberRecord> = sqlx::query_as(
            "SELECT id, project_id, user_id, created_at FROM project_members WHERE user_id = ? ORDER BY created_at ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            log::error!(target: "huddle", "msg=\"database error\", operation=\"find_memberships_by_user\", error=\"{e}\"");
            MembershipError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
