// Role resolution shared by the services
//
// The owner is always treated as ADMIN, whether or not a member row exists.

use uuid::Uuid;

use super::errors::{ServiceError, ServiceResult};
use crate::domain::member::Role;
use crate::domain::repositories::MemberRepository;
use crate::domain::team::Team;

/// Resolves the role `user_id` holds in `team`, if any
pub(crate) async fn effective_role(
    members: &dyn MemberRepository,
    team: &Team,
    user_id: Uuid,
) -> ServiceResult<Option<Role>> {
    if team.is_owner(user_id) {
        return Ok(Some(Role::Admin));
    }

    let member = members.find_by_team_and_user(team.id(), user_id).await?;
    Ok(member.map(|m| m.role()))
}

/// Fails with `MembershipRequired` unless `user_id` is the owner or a member
pub(crate) async fn require_member(
    members: &dyn MemberRepository,
    team: &Team,
    user_id: Uuid,
) -> ServiceResult<Role> {
    effective_role(members, team, user_id)
        .await?
        .ok_or(ServiceError::MembershipRequired)
}

/// Fails with `AdminRequired` unless `user_id` may manage members
pub(crate) async fn require_admin(
    members: &dyn MemberRepository,
    team: &Team,
    user_id: Uuid,
) -> ServiceResult<()> {
    match effective_role(members, team, user_id).await? {
        Some(role) if role.can_manage_members() => Ok(()),
        _ => Err(ServiceError::AdminRequired),
    }
}
