//! Core types for project membership.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project owned by one user and visible to its members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier.
    pub id: i64,
    /// Human-readable project name.
    pub name: String,
    /// Optional free-form description.
    pub details: Option<String>,
    /// Identity-provider id of the owning user. The owner always holds a
    /// membership row as well.
    pub owner_id: String,
    /// Opaque join secret, generated exactly once at creation and never
    /// rotated. Anyone presenting it may join.
    pub invite_token: String,
    /// When the project was created.
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Whether `user_id` owns this project.
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id == user_id
    }
}

/// Links a user to a project.
///
/// Unique per `(project_id, user_id)`; that constraint is the only
/// concurrency guard the join path needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMember {
    /// Unique identifier.
    pub id: i64,
    /// The project this membership belongs to.
    pub project_id: i64,
    /// Identity-provider id of the member.
    pub user_id: String,
    /// When the user joined.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_owned_by() {
        let project = Project {
            id: 1,
            name: "Alpha".to_owned(),
            details: None,
            owner_id: "user-a".to_owned(),
            invite_token: "tok".to_owned(),
            created_at: Utc::now(),
        };

        assert!(project.is_owned_by("user-a"));
        assert!(!project.is_owned_by("user-b"));
    }
}
