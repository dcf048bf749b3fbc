use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::access;
use super::errors::{ServiceError, ServiceResult};
use crate::domain::member::{RepositoryMember, Role};
use crate::domain::repositories::{MemberRepository, TeamRepository, UserRepository};
use crate::domain::team::{Team, TeamEvent};
use crate::domain::user::Email;

/// Request to change a member's role
///
/// The role is kept as the raw string the client sent; it is only parsed
/// once the owner guard has passed.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: String,
}

impl UpdateRoleRequest {
    pub fn new(role: impl Into<String>) -> Self {
        Self { role: role.into() }
    }
}

/// Request to add an existing user to a repository
#[derive(Debug, Clone, Deserialize)]
pub struct InviteMemberRequest {
    pub email: String,
    pub role: String,
}

/// Manages repository memberships
///
/// Every mutation is guarded: the acting user must be the owner or an
/// ADMIN member, and the owner's own membership is untouchable.
#[derive(Clone)]
pub struct MemberService {
    teams: Arc<dyn TeamRepository>,
    users: Arc<dyn UserRepository>,
    members: Arc<dyn MemberRepository>,
}

impl MemberService {
    pub fn new(
        teams: Arc<dyn TeamRepository>,
        users: Arc<dyn UserRepository>,
        members: Arc<dyn MemberRepository>,
    ) -> Self {
        Self {
            teams,
            users,
            members,
        }
    }

    /// Adds the user registered under `request.email` to the repository
    pub async fn invite_member(
        &self,
        team_id: Uuid,
        acting_user_id: Uuid,
        request: InviteMemberRequest,
    ) -> ServiceResult<RepositoryMember> {
        let team = self.load_team(team_id).await?;
        access::require_admin(self.members.as_ref(), &team, acting_user_id).await?;

        let role: Role = request.role.parse().map_err(ServiceError::InvalidRole)?;
        let email = Email::new(&request.email).map_err(ServiceError::Validation)?;

        let invitee = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ServiceError::UserNotFound(email.to_string()))?;

        if team.is_owner(invitee.id)
            || self
                .members
                .find_by_team_and_user(team_id, invitee.id)
                .await?
                .is_some()
        {
            return Err(ServiceError::AlreadyMember);
        }

        let member = RepositoryMember::new(team_id, invitee.id, role);
        self.members.save(&member).await?;

        TeamEvent::MemberInvited {
            team_id,
            user_id: invitee.id,
            role,
        }
        .record();

        Ok(member)
    }

    /// Lists the members of a repository the acting user belongs to
    ///
    /// The owner has no member row, so it is listed first as `ADMIN`,
    /// joined at the repository's creation time.
    pub async fn list_members(
        &self,
        team_id: Uuid,
        acting_user_id: Uuid,
    ) -> ServiceResult<Vec<RepositoryMember>> {
        let team = self.load_team(team_id).await?;
        access::require_member(self.members.as_ref(), &team, acting_user_id).await?;

        let owner = RepositoryMember::from_persistence(
            team.id(),
            team.owner_id(),
            Role::Admin,
            team.created_at(),
        );
        let rows = self.members.find_by_team(team_id).await?;

        Ok(std::iter::once(owner)
            .chain(rows.into_iter().filter(|m| !team.is_owner(m.user_id())))
            .collect())
    }

    /// Changes the role of `target_user_id` in the repository
    ///
    /// The owner's role can never be changed, whatever role is requested
    /// and whoever asks.
    pub async fn update_member_role(
        &self,
        team_id: Uuid,
        target_user_id: Uuid,
        acting_user_id: Uuid,
        request: UpdateRoleRequest,
    ) -> ServiceResult<RepositoryMember> {
        let team = self.load_team(team_id).await?;

        if team.is_owner(target_user_id) {
            warn!(
                team_id = %team_id,
                acting_user_id = %acting_user_id,
                requested_role = %request.role,
                "refused to change owner role"
            );
            return Err(ServiceError::OwnerRoleImmutable);
        }

        self.users
            .find_by_id(acting_user_id)
            .await?
            .ok_or_else(|| ServiceError::UserNotFound(acting_user_id.to_string()))?;
        access::require_admin(self.members.as_ref(), &team, acting_user_id).await?;

        let role: Role = request.role.parse().map_err(ServiceError::InvalidRole)?;

        let mut member = self
            .members
            .find_by_team_and_user(team_id, target_user_id)
            .await?
            .ok_or(ServiceError::MemberNotFound(target_user_id))?;

        match member.change_role(role) {
            Some(event) => {
                self.members.save(&member).await?;
                event.record();
            }
            None => debug!(team_id = %team_id, user_id = %target_user_id, "role unchanged"),
        }

        Ok(member)
    }

    /// Removes `target_user_id` from the repository
    ///
    /// The owner can never be removed, whoever asks.
    pub async fn kick_member(
        &self,
        team_id: Uuid,
        target_user_id: Uuid,
        acting_user_id: Uuid,
    ) -> ServiceResult<()> {
        let team = self.load_team(team_id).await?;

        if team.is_owner(target_user_id) {
            warn!(
                team_id = %team_id,
                acting_user_id = %acting_user_id,
                "refused to kick owner"
            );
            return Err(ServiceError::OwnerCannotBeKicked);
        }

        access::require_admin(self.members.as_ref(), &team, acting_user_id).await?;

        self.members
            .find_by_team_and_user(team_id, target_user_id)
            .await?
            .ok_or(ServiceError::MemberNotFound(target_user_id))?;

        self.members.delete(team_id, target_user_id).await?;

        TeamEvent::MemberKicked {
            team_id,
            user_id: target_user_id,
            kicked_by: acting_user_id,
        }
        .record();
        info!(team_id = %team_id, user_id = %target_user_id, "member removed");

        Ok(())
    }

    async fn load_team(&self, team_id: Uuid) -> ServiceResult<Team> {
        self.teams
            .find_by_id(team_id)
            .await?
            .ok_or(ServiceError::RepositoryNotFound(team_id))
    }
}
