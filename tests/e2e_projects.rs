//! End-to-end tests for the membership core.
//!
//! These tests exercise the actions against mock repositories.
//! Run with: `cargo test --features mocks --test e2e_projects`

#![cfg(feature = "mocks")]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use huddle::projects::{
    CreateProjectAction, CreateProjectInput, InviteLinkAction, JoinByTokenAction,
    ListProjectsAction, MockProjectMemberRepository, MockProjectRepository,
    ProjectMemberRepository,
};
use huddle::{MembershipError, SecretString};

const BASE_URL: &str = "https://huddle.example.com";

struct Harness {
    project_repo: MockProjectRepository,
    member_repo: MockProjectMemberRepository,
}

impl Harness {
    fn new() -> Self {
        Self {
            project_repo: MockProjectRepository::new(),
            member_repo: MockProjectMemberRepository::new(),
        }
    }

    async fn create(&self, owner: &str, name: &str) -> huddle::projects::Project {
        CreateProjectAction::new(self.project_repo.clone(), self.member_repo.clone())
            .execute(CreateProjectInput {
                name: name.to_owned(),
                details: None,
                owner_id: owner.to_owned(),
            })
            .await
            .unwrap()
    }

    async fn join(&self, token: &str, user: &str) -> Result<(), MembershipError> {
        JoinByTokenAction::new(self.project_repo.clone(), self.member_repo.clone())
            .execute(&SecretString::new(token), user)
            .await
            .map(|_| ())
    }

    async fn list(&self, user: &str) -> Vec<huddle::projects::Project> {
        ListProjectsAction::new(self.project_repo.clone(), self.member_repo.clone())
            .execute(user)
            .await
            .unwrap()
    }

    async fn invite_link(&self, project_id: i64, user: &str) -> Result<String, MembershipError> {
        InviteLinkAction::new(self.project_repo.clone(), BASE_URL)
            .execute(project_id, user)
            .await
    }
}

#[tokio::test]
async fn test_create_yields_unique_token_and_owner_listing() {
    let h = Harness::new();

    let alpha = h.create("user-a", "Alpha").await;
    let beta = h.create("user-a", "Beta").await;

    assert!(!alpha.invite_token.is_empty());
    assert!(!beta.invite_token.is_empty());
    assert_ne!(alpha.invite_token, beta.invite_token);

    let listed = h.list("user-a").await;
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().any(|p| p.id == alpha.id));
    assert!(listed.iter().any(|p| p.id == beta.id));
}

#[tokio::test]
async fn test_join_is_idempotent() {
    let h = Harness::new();
    let project = h.create("user-a", "Alpha").await;

    h.join(&project.invite_token, "user-b").await.unwrap();
    h.join(&project.invite_token, "user-b").await.unwrap();

    let members = h.member_repo.find_by_project(project.id).await.unwrap();
    let b_rows: Vec<_> = members.iter().filter(|m| m.user_id == "user-b").collect();
    assert_eq!(b_rows.len(), 1);
}

#[tokio::test]
async fn test_join_unknown_token_fails_for_everyone() {
    let h = Harness::new();
    let project = h.create("user-a", "Alpha").await;

    // owner, member and stranger all get the same answer
    for user in ["user-a", "user-b", "user-c"] {
        let result = h.join("does-not-exist", user).await;
        assert_eq!(result.unwrap_err(), MembershipError::NotFound);
    }

    // nothing joined anything
    let members = h.member_repo.find_by_project(project.id).await.unwrap();
    assert_eq!(members.len(), 1); // just the owner
}

#[tokio::test]
async fn test_invite_link_owner_only() {
    let h = Harness::new();
    let project = h.create("user-a", "Alpha").await;

    let link = h.invite_link(project.id, "user-a").await.unwrap();
    assert_eq!(
        link,
        format!("{BASE_URL}/projects/join/{}", project.invite_token)
    );

    let result = h.invite_link(project.id, "user-c").await;
    assert_eq!(result.unwrap_err(), MembershipError::Forbidden);
}

#[tokio::test]
async fn test_membership_gates_visibility() {
    let h = Harness::new();
    let alpha = h.create("user-a", "Alpha").await;
    let _gamma = h.create("user-a", "Gamma").await;

    h.join(&alpha.invite_token, "user-b").await.unwrap();

    let listed = h.list("user-b").await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, alpha.id);
}

/// The scenario from the collaborator contract: owner A creates "Alpha",
/// B joins twice with the project's token, and ends up with exactly one
/// membership and the project in their listing.
#[tokio::test]
async fn test_full_invite_workflow() {
    let h = Harness::new();

    let project = h.create("user-a", "Alpha").await;
    let token = project.invite_token.clone();

    h.join(&token, "user-b").await.unwrap();

    let listed = h.list("user-b").await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Alpha");

    // second join is a success and changes nothing
    h.join(&token, "user-b").await.unwrap();
    let members = h.member_repo.find_by_project(project.id).await.unwrap();
    let b_rows: Vec<_> = members.iter().filter(|m| m.user_id == "user-b").collect();
    assert_eq!(b_rows.len(), 1);
}
