use crate::projects::{ProjectMember, ProjectMemberRepository, ProjectRepository};
use crate::{MembershipError, SecretString};

/// Action to join a project by invite token.
///
/// This action:
/// 1. Looks up the project the token belongs to
/// 2. Upserts the caller's membership row
///
/// Joining is idempotent: a second join with the same token is a success
/// and leaves the single existing row untouched. Tokens do not expire and
/// are not consumed by use; a leaked token admits holders until the
/// project goes away. Known limitation, kept deliberately.
pub struct JoinByTokenAction<P, M>
where
    P: ProjectRepository,
    M: ProjectMemberRepository,
{
    project_repo: P,
    member_repo: M,
}

impl<P: ProjectRepository, M: ProjectMemberRepository> JoinByTokenAction<P, M> {
    /// Creates a new `JoinByTokenAction`.
    pub fn new(project_repo: P, member_repo: M) -> Self {
        Self {
            project_repo,
            member_repo,
        }
    }

    /// Joins the project `token` belongs to as `user_id`.
    ///
    /// # Returns
    ///
    /// - `Ok(membership)` - The caller's membership row (new or existing)
    /// - `Err(MembershipError::NotFound)` - No project carries this token,
    ///   regardless of who asks
    /// - `Err(_)` - Store errors
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "join_by_token", skip_all, err)
    )]
    pub async fn execute(
        &self,
        token: &SecretString,
        user_id: &str,
    ) -> Result<ProjectMember, MembershipError> {
        let project = self
            .project_repo
            .find_by_invite_token(token.expose_secret())
            .await?
            .ok_or(MembershipError::NotFound)?;

        let membership = self.member_repo.upsert(project.id, user_id).await?;

        log::info!(
            target: "huddle",
            "msg=\"member joined\", project_id={}, user_id=\"{}\"",
            membership.project_id,
            membership.user_id
        );

        Ok(membership)
    }
}
