//! One action per membership operation.

mod create;
mod invite_link;
mod join;
mod list;

pub use create::{CreateProjectAction, CreateProjectInput, TokenConfig};
pub use invite_link::{parse_invite_token, InviteLinkAction};
pub use join::JoinByTokenAction;
pub use list::ListProjectsAction;
