//! `SQLite` implementation of [`ProjectRepository`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use crate::projects::{CreateProject, Project, ProjectRepository};
use crate::MembershipError;

/// `SQLite`-backed project repository.
#[derive(Clone)]
pub struct SqliteProjectRepository {
    pool: SqlitePool,
}

impl SqliteProjectRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ProjectRecord {
    id: i64,
    name: String,
    details: Option<String>,
    owner_id: String,
    invite_token: String,
    created_at: DateTime<Utc>,
}

impl From<ProjectRecord> for Project {
    fn from(row: ProjectRecord) -> Self {
        Project {
            id: row.id,
            name: row.name,
            details: row.details,
            owner_id: row.owner_id,
            invite_token: row.invite_token,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl ProjectRepository for SqliteProjectRepository {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, data), err))]
    async fn create(&self, data: CreateProject) -> Result<Project, MembershipError> {
        let row: ProjectRecord = sqlx::query_as(
            r"
            INSERT INTO projects (name, details, owner_id, invite_token)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, details, owner_id, invite_token, created_at
            ",
        )
        .bind(&data.name)
        .bind(&data.details)
        .bind(&data.owner_id)
        .bind(&data.invite_token)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if matches!(&e, sqlx::Error::Database(db) if db.is_unique_violation()) {
                return MembershipError::Conflict;
            }
            log::error!(target: "huddle", "msg=\"database error\", operation=\"create_project\", error=\"{e}\"");
            MembershipError::DatabaseError(e.to_string())
        })?;

        Ok(row.into())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn find_by_id(&self, id: i64) -> Result<Option<Project>, MembershipError> {
        let row: Option<ProjectRecord> = sqlx::query_as(
            "SELECT id, name, details, owner_id, invite_token, created_at FROM projects WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log::error!(target: "huddle", "msg=\"database error\", operation=\"find_project_by_id\", error=\"{e}\"");
            MembershipError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    async fn find_by_invite_token(
        &self,
        token: &str,
    ) -> Result<Option<Project>, MembershipError> {
        let row: Option<ProjectRecord> = sqlx::query_as(
            "SELECT id, name, details, owner_id, invite_token, created_at FROM projects WHERE invite_token = ?",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log::error!(target: "huddle", "msg=\"database error\", operation=\"find_project_by_invite_token\", error=\"{e}\"");
            MembershipError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn delete(&self, id: i64) -> Result<(), MembershipError> {
        sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                log::error!(target: "huddle", "msg=\"database error\", operation=\"delete_project\", error=\"{e}\"");
                MembershipError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }
}
