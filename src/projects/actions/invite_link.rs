use crate::projects::ProjectRepository;
use crate::MembershipError;

/// Path marker invite links share: `<base>/projects/join/<token>`.
const JOIN_PATH: &str = "/projects/join/";

/// Extracts the invite token from a pasted invite link.
///
/// Accepts the full URL form (`https://host/projects/join/<token>`) and
/// returns the token segment, stopping at any `/`, `?` or `#`. Returns
/// `None` when the join-path marker is absent or the segment is empty.
pub fn parse_invite_token(link: &str) -> Option<&str> {
    let start = link.find(JOIN_PATH)? + JOIN_PATH.len();
    let rest = &link[start..];
    let end = rest.find(&['/', '?', '#'][..]).unwrap_or(rest.len());
    let token = &rest[..end];
    (!token.is_empty()).then_some(token)
}

/// Action to produce a project's invite link.
///
/// Only the owner may ask. A missing project answers exactly like a
/// foreign one (`Forbidden`) so the endpoint does not leak which project
/// ids exist. No token is minted here; the link embeds the token the
/// project was created with.
pub struct InviteLinkAction<P>
where
    P: ProjectRepository,
{
    project_repo: P,
    base_url: String,
}

impl<P: ProjectRepository> InviteLinkAction<P> {
    /// Creates a new `InviteLinkAction`. `base_url` must not end in a slash.
    pub fn new(project_repo: P, base_url: impl Into<String>) -> Self {
        Self {
            project_repo,
            base_url: base_url.into(),
        }
    }

    /// Returns the invite link for `project_id`.
    ///
    /// # Returns
    ///
    /// - `Ok(url)` - `<base_url>/projects/join/<invite_token>`
    /// - `Err(MembershipError::Forbidden)` - Requester is not the owner,
    ///   or the project does not exist
    /// - `Err(_)` - Store errors
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "invite_link", skip_all, err)
    )]
    pub async fn execute(
        &self,
        project_id: i64,
        requester_id: &str,
    ) -> Result<String, MembershipError> {
        let project = self
            .project_repo
            .find_by_id(project_id)
            .await?
            .ok_or(MembershipError::Forbidden)?;

        if !project.is_owned_by(requester_id) {
            return Err(MembershipError::Forbidden);
        }

        Ok(format!(
            "{}{}{}",
            self.base_url, JOIN_PATH, project.invite_token
        ))
    }
}
