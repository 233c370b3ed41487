use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::projects::Project;

// Request DTOs

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    /// Optional at the serde level so an absent field reports the same
    /// validation error as an empty one.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

// Response DTOs

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: i64,
    pub name: String,
    pub details: Option<String>,
    pub owner_id: String,
    pub invite_token: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CreateProjectResponse {
    pub project: ProjectResponse,
}

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectResponse>,
}

#[derive(Debug, Serialize)]
pub struct InviteLinkResponse {
    #[serde(rename = "inviteLink")]
    pub invite_link: String,
}

#[derive(Debug, Serialize)]
pub struct JoinResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        ProjectResponse {
            id: project.id,
            name: project.name,
            details: project.details,
            owner_id: project.owner_id,
            invite_token: project.invite_token,
            created_at: project.created_at,
        }
    }
}

impl From<crate::MembershipError> for ErrorResponse {
    fn from(err: crate::MembershipError) -> Self {
        ErrorResponse {
            error: err.to_string(),
        }
    }
}
