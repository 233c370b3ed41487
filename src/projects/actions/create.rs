use crate::crypto::{generate_token, DEFAULT_TOKEN_LENGTH};
use crate::projects::{CreateProject, Project, ProjectMemberRepository, ProjectRepository};
use crate::validators::{validate_details, validate_name};
use crate::MembershipError;

/// Configuration for invite-token generation.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Number of characters in generated invite tokens. Default: 32
    pub token_length: usize,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            token_length: DEFAULT_TOKEN_LENGTH,
        }
    }
}

/// Input data for creating a project.
#[derive(Debug, Clone)]
pub struct CreateProjectInput {
    pub name: String,
    pub details: Option<String>,
    pub owner_id: String,
}

/// Action to create a project.
///
/// This action:
/// 1. Validates the name and optional details
/// 2. Generates the project's invite token
/// 3. Persists the project row
/// 4. Persists the owner's membership row
///
/// The invite token is minted exactly once here; no later operation ever
/// replaces it. A uniqueness violation on the token is treated as a
/// transient conflict and retried once with a fresh token.
pub struct CreateProjectAction<P, M>
where
    P: ProjectRepository,
    M: ProjectMemberRepository,
{
    project_repo: P,
    member_repo: M,
    config: TokenConfig,
}

impl<P: ProjectRepository, M: ProjectMemberRepository> CreateProjectAction<P, M> {
    /// Creates a new `CreateProjectAction` with default configuration.
    pub fn new(project_repo: P, member_repo: M) -> Self {
        Self {
            project_repo,
            member_repo,
            config: TokenConfig::default(),
        }
    }

    /// Creates a new `CreateProjectAction` with custom configuration.
    pub fn with_config(project_repo: P, member_repo: M, config: TokenConfig) -> Self {
        Self {
            project_repo,
            member_repo,
            config,
        }
    }

    /// Creates a project owned by `input.owner_id`.
    ///
    /// # Returns
    ///
    /// - `Ok(project)` - Project created, owner membership written
    /// - `Err(MembershipError::Validation(_))` - Empty name or oversized input
    /// - `Err(_)` - Store errors
    ///
    /// The project and membership writes are not one transaction. If the
    /// membership write fails the just-created project row is deleted
    /// again, so a partial failure never leaves a project nobody owns a
    /// membership in.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "create_project", skip_all, err)
    )]
    pub async fn execute(&self, input: CreateProjectInput) -> Result<Project, MembershipError> {
        validate_name(&input.name)?;
        if let Some(details) = &input.details {
            validate_details(details)?;
        }

        let mut data = CreateProject {
            name: input.name,
            details: input.details,
            owner_id: input.owner_id,
            invite_token: generate_token(self.config.token_length),
        };

        let project = match self.project_repo.create(data.clone()).await {
            Ok(project) => project,
            Err(MembershipError::Conflict) => {
                // 128+ bits of token space makes this a store hiccup, not
                // a real collision; one fresh token settles it.
                log::warn!(target: "huddle", "msg=\"invite token conflict, retrying once\"");
                data.invite_token = generate_token(self.config.token_length);
                self.project_repo.create(data).await?
            }
            Err(err) => return Err(err),
        };

        if let Err(err) = self.member_repo.upsert(project.id, &project.owner_id).await {
            log::error!(
                target: "huddle",
                "msg=\"owner membership write failed, removing project\", project_id={}, error=\"{err}\"",
                project.id
            );
            if let Err(del_err) = self.project_repo.delete(project.id).await {
                log::error!(
                    target: "huddle",
                    "msg=\"compensating delete failed\", project_id={}, error=\"{del_err}\"",
                    project.id
                );
            }
            return Err(err);
        }

        log::info!(
            target: "huddle",
            "msg=\"project created\", project_id={}, owner_id=\"{}\"",
            project.id,
            project.owner_id
        );

        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::{MockProjectMemberRepository, MockProjectRepository};
    use crate::validators::ValidationError;

    fn input(name: &str) -> CreateProjectInput {
        CreateProjectInput {
            name: name.to_owned(),
            details: None,
            owner_id: "user-a".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_create_success() {
        let action =
            CreateProjectAction::new(MockProjectRepository::new(), MockProjectMemberRepository::new());

        let project = action.execute(input("Alpha")).await.unwrap();

        assert_eq!(project.name, "Alpha");
        assert_eq!(project.owner_id, "user-a");
        assert!(!project.invite_token.is_empty());
    }

    #[tokio::test]
    async fn test_create_writes_owner_membership() {
        let project_repo = MockProjectRepository::new();
        let member_repo = MockProjectMemberRepository::new();
        let action = CreateProjectAction::new(project_repo.clone(), member_repo.clone());

        let project = action.execute(input("Alpha")).await.unwrap();

        let membership = member_repo
            .find_by_project_and_user(project.id, "user-a")
            .await
            .unwrap();
        assert!(membership.is_some());
    }

    #[tokio::test]
    async fn test_create_empty_name() {
        let action =
            CreateProjectAction::new(MockProjectRepository::new(), MockProjectMemberRepository::new());

        let result = action.execute(input("")).await;

        assert_eq!(
            result.unwrap_err(),
            MembershipError::Validation(ValidationError::NameEmpty)
        );
    }

    #[tokio::test]
    async fn test_create_tokens_unique_across_projects() {
        let action =
            CreateProjectAction::new(MockProjectRepository::new(), MockProjectMemberRepository::new());

        let first = action.execute(input("Alpha")).await.unwrap();
        let second = action.execute(input("Beta")).await.unwrap();

        assert_ne!(first.invite_token, second.invite_token);
    }

    #[tokio::test]
    async fn test_create_rolls_back_on_membership_failure() {
        let project_repo = MockProjectRepository::new();
        let member_repo = MockProjectMemberRepository::new();
        member_repo.fail_next_upsert();
        let action = CreateProjectAction::new(project_repo.clone(), member_repo);

        let result = action.execute(input("Alpha")).await;

        assert!(matches!(
            result.unwrap_err(),
            MembershipError::DatabaseError(_)
        ));
        // the half-created project must be gone
        assert!(project_repo.projects.read().unwrap().is_empty());
    }
}
