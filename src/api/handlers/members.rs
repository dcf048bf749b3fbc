use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::JwtAuth;
use crate::api::state::AppState;
use crate::domain::member::{RepositoryMember, Role};
use crate::services::{InviteMemberRequest, UpdateRoleRequest};

#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub team_id: Uuid,
    pub user_id: Uuid,
    pub role: Role,
    pub joined_at: DateTime<Utc>,
}

impl From<&RepositoryMember> for MemberResponse {
    fn from(member: &RepositoryMember) -> Self {
        Self {
            team_id: member.team_id(),
            user_id: member.user_id(),
            role: member.role(),
            joined_at: member.joined_at(),
        }
    }
}

/// GET /api/repositories/:id/members
pub async fn list_members(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(team_id): Path<Uuid>,
) -> Result<Json<Vec<MemberResponse>>, ApiError> {
    let members = state.member_service.list_members(team_id, user_id).await?;

    Ok(Json(members.iter().map(MemberResponse::from).collect()))
}

/// POST /api/repositories/:id/members
pub async fn invite_member(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(team_id): Path<Uuid>,
    Json(req): Json<InviteMemberRequest>,
) -> Result<(StatusCode, Json<MemberResponse>), ApiError> {
    let member = state
        .member_service
        .invite_member(team_id, user_id, req)
        .await?;

    Ok((StatusCode::CREATED, Json(MemberResponse::from(&member))))
}

/// PUT /api/repositories/:id/members/:user_id/role
pub async fn update_member_role(
    State(state): State<AppState>,
    JwtAuth(acting_user_id): JwtAuth,
    Path((team_id, target_user_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<UpdateRoleRequest>,
) -> Result<Json<MemberResponse>, ApiError> {
    let member = state
        .member_service
        .update_member_role(team_id, target_user_id, acting_user_id, req)
        .await?;

    Ok(Json(MemberResponse::from(&member)))
}

/// DELETE /api/repositories/:id/members/:user_id
pub async fn kick_member(
    State(state): State<AppState>,
    JwtAuth(acting_user_id): JwtAuth,
    Path((team_id, target_user_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    state
        .member_service
        .kick_member(team_id, target_user_id, acting_user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
