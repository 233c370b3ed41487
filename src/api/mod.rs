//! HTTP/JSON boundary.
//!
//! Request/response DTOs live here; the axum transport layer is behind the
//! `axum_api` feature.

mod types;

pub use types::{
    CreateProjectRequest, CreateProjectResponse, ErrorResponse, InviteLinkResponse, JoinResponse,
    ProjectListResponse, ProjectResponse,
};

#[cfg(feature = "axum_api")]
pub mod axum;
