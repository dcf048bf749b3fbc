use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::JwtAuth;
use crate::api::state::AppState;
use crate::domain::team::Team;

/// Request body for creating a repository
#[derive(Debug, Deserialize)]
pub struct CreateRepositoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Response from repository creation
#[derive(Debug, Serialize)]
pub struct CreateRepositoryResponse {
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct RepositoryResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<&Team> for RepositoryResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            description: team.description().to_string(),
            owner_id: team.owner_id(),
            created_at: team.created_at(),
        }
    }
}

/// Create a repository owned by the caller
///
/// POST /api/repositories
pub async fn create_repository(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Json(req): Json<CreateRepositoryRequest>,
) -> Result<(StatusCode, Json<CreateRepositoryResponse>), ApiError> {
    let id = state
        .repo_service
        .create_repository(&req.name, &req.description, user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(CreateRepositoryResponse { id })))
}

/// List repositories owned by the caller
///
/// GET /api/repositories
pub async fn list_repositories(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
) -> Result<Json<Vec<RepositoryResponse>>, ApiError> {
    let teams = state.repo_service.list_owned(user_id).await?;

    Ok(Json(teams.iter().map(RepositoryResponse::from).collect()))
}

/// Get a repository by ID
///
/// GET /api/repositories/:id
pub async fn get_repository(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(id): Path<Uuid>,
) -> Result<Json<RepositoryResponse>, ApiError> {
    let team = state.repo_service.get_repository(id, user_id).await?;

    Ok(Json(RepositoryResponse::from(&team)))
}

/// Delete a repository
///
/// DELETE /api/repositories/:id
pub async fn delete_repository(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.repo_service.delete_repository(id, user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
