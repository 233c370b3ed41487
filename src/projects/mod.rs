//! Membership core: projects, membership rows, and the invite workflow.

mod actions;
mod repository;
mod types;

pub use actions::{
    parse_invite_token, CreateProjectAction, CreateProjectInput, InviteLinkAction,
    JoinByTokenAction, ListProjectsAction, TokenConfig,
};
pub use repository::{CreateProject, ProjectMemberRepository, ProjectRepository};
pub use types::{Project, ProjectMember};

#[cfg(any(test, feature = "mocks"))]
mod mocks;

#[cfg(any(test, feature = "mocks"))]
pub use mocks::{MockProjectMemberRepository, MockProjectRepository};
