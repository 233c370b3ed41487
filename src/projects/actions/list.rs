use crate::projects::{Project, ProjectMemberRepository, ProjectRepository};
use crate::MembershipError;

/// Action to list the projects a user belongs to.
///
/// Two-stage lookup: the user's membership rows first, then the project
/// row per membership. A user with no memberships gets an empty list, not
/// an error. Membership is the only thing that makes a project visible;
/// ownership without the (always-written) owner membership row would not.
pub struct ListProjectsAction<P, M>
where
    P: ProjectRepository,
    M: ProjectMemberRepository,
{
    project_repo: P,
    member_repo: M,
}

impl<P: ProjectRepository, M: ProjectMemberRepository> ListProjectsAction<P, M> {
    /// Creates a new `ListProjectsAction`.
    pub fn new(project_repo: P, member_repo: M) -> Self {
        Self {
            project_repo,
            member_repo,
        }
    }

    /// Returns every project `user_id` holds a membership in.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "list_projects", skip_all, err)
    )]
    pub async fn execute(&self, user_id: &str) -> Result<Vec<Project>, MembershipError> {
        let memberships = self.member_repo.find_by_user(user_id).await?;

        let mut projects = Vec::with_capacity(memberships.len());
        for membership in memberships {
            if let Some(project) = self.project_repo.find_by_id(membership.project_id).await? {
                projects.push(project);
            }
        }

        Ok(projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::{CreateProject, MockProjectMemberRepository, MockProjectRepository};

    async fn seed_project(
        repo: &MockProjectRepository,
        name: &str,
        token: &str,
    ) -> crate::projects::Project {
        repo.create(CreateProject {
            name: name.to_owned(),
            details: None,
            owner_id: "user-a".to_owned(),
            invite_token: token.to_owned(),
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_list_empty_without_memberships() {
        let project_repo = MockProjectRepository::new();
        seed_project(&project_repo, "Alpha", "t1").await;
        let action = ListProjectsAction::new(project_repo, MockProjectMemberRepository::new());

        let projects = action.execute("user-b").await.unwrap();

        assert!(projects.is_empty());
    }

    #[tokio::test]
    async fn test_list_only_member_projects() {
        let project_repo = MockProjectRepository::new();
        let alpha = seed_project(&project_repo, "Alpha", "t1").await;
        let _beta = seed_project(&project_repo, "Beta", "t2").await;
        let member_repo = MockProjectMemberRepository::new();
        member_repo.upsert(alpha.id, "user-b").await.unwrap();
        let action = ListProjectsAction::new(project_repo, member_repo);

        let projects = action.execute("user-b").await.unwrap();

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Alpha");
    }
}
