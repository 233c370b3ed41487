use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::middleware::AuthenticatedIdentity;
use super::routes::AppState;
use crate::api::{
    CreateProjectRequest, CreateProjectResponse, ErrorResponse, InviteLinkResponse, JoinResponse,
    ProjectListResponse,
};
use crate::projects::{
    CreateProjectAction, CreateProjectInput, InviteLinkAction, JoinByTokenAction,
    ListProjectsAction, ProjectMemberRepository, ProjectRepository, TokenConfig,
};
use crate::{IdentityProvider, MembershipError, SecretString};

pub async fn create_project<P, R, M>(
    State(state): State<AppState<P, R, M>>,
    identity: AuthenticatedIdentity<P>,
    Json(body): Json<CreateProjectRequest>,
) -> impl IntoResponse
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
    R: ProjectRepository + Clone + Send + Sync + 'static,
    M: ProjectMemberRepository + Clone + Send + Sync + 'static,
{
    let action = CreateProjectAction::with_config(
        state.project_repo.clone(),
        state.member_repo.clone(),
        TokenConfig {
            token_length: state.config.token_length,
        },
    );

    let input = CreateProjectInput {
        name: body.name.unwrap_or_default(),
        details: body.details,
        owner_id: identity.identity().id.clone(),
    };

    match action.execute(input).await {
        Ok(project) => (
            StatusCode::CREATED,
            Json(CreateProjectResponse {
                project: project.into(),
            }),
        )
            .into_response(),
        Err(err @ MembershipError::Validation(_)) => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::from(err))).into_response()
        }
        Err(err) => {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::from(err))).into_response()
        }
    }
}

pub async fn list_projects<P, R, M>(
    State(state): State<AppState<P, R, M>>,
    identity: AuthenticatedIdentity<P>,
) -> impl IntoResponse
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
    R: ProjectRepository + Clone + Send + Sync + 'static,
    M: ProjectMemberRepository + Clone + Send + Sync + 'static,
{
    let action = ListProjectsAction::new(state.project_repo.clone(), state.member_repo.clone());

    match action.execute(&identity.identity().id).await {
        Ok(projects) => Json(ProjectListResponse {
            projects: projects.into_iter().map(Into::into).collect(),
        })
        .into_response(),
        Err(err) => {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::from(err))).into_response()
        }
    }
}

pub async fn invite_link<P, R, M>(
    State(state): State<AppState<P, R, M>>,
    identity: AuthenticatedIdentity<P>,
    Path(project_id): Path<i64>,
) -> impl IntoResponse
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
    R: ProjectRepository + Clone + Send + Sync + 'static,
    M: ProjectMemberRepository + Clone + Send + Sync + 'static,
{
    let action = InviteLinkAction::new(state.project_repo.clone(), state.config.base_url.clone());

    match action.execute(project_id, &identity.identity().id).await {
        Ok(link) => Json(InviteLinkResponse { invite_link: link }).into_response(),
        Err(err @ MembershipError::Forbidden) => {
            (StatusCode::FORBIDDEN, Json(ErrorResponse::from(err))).into_response()
        }
        Err(err) => {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::from(err))).into_response()
        }
    }
}

pub async fn join_by_token<P, R, M>(
    State(state): State<AppState<P, R, M>>,
    identity: AuthenticatedIdentity<P>,
    Path(token): Path<String>,
) -> impl IntoResponse
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
    R: ProjectRepository + Clone + Send + Sync + 'static,
    M: ProjectMemberRepository + Clone + Send + Sync + 'static,
{
    let action = JoinByTokenAction::new(state.project_repo.clone(), state.member_repo.clone());

    match action
        .execute(&SecretString::new(token), &identity.identity().id)
        .await
    {
        Ok(_membership) => Json(JoinResponse { success: true }).into_response(),
        Err(MembershipError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Invalid token".to_owned(),
            }),
        )
            .into_response(),
        Err(err) => {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::from(err))).into_response()
        }
    }
}
