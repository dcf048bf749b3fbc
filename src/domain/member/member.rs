use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::role::Role;
use crate::domain::team::TeamEvent;

/// Membership of a user in a team, with the role they hold there
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryMember {
    team_id: Uuid,
    user_id: Uuid,
    role: Role,
    joined_at: DateTime<Utc>,
}

impl RepositoryMember {
    pub fn new(team_id: Uuid, user_id: Uuid, role: Role) -> Self {
        Self {
            team_id,
            user_id,
            role,
            joined_at: Utc::now(),
        }
    }

    /// Changes the member's role
    ///
    /// Returns the `MemberRoleChanged` event, or `None` when the member
    /// already holds `role`.
    pub fn change_role(&mut self, role: Role) -> Option<TeamEvent> {
        if self.role == role {
            return None;
        }

        let from = self.role;
        self.role = role;

        Some(TeamEvent::MemberRoleChanged {
            team_id: self.team_id,
            user_id: self.user_id,
            from,
            to: role,
        })
    }

    pub fn team_id(&self) -> Uuid {
        self.team_id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn joined_at(&self) -> DateTime<Utc> {
        self.joined_at
    }

    pub fn from_persistence(
        team_id: Uuid,
        user_id: Uuid,
        role: Role,
        joined_at: DateTime<Utc>,
    ) -> Self {
        Self {
            team_id,
            user_id,
            role,
            joined_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_role_emits_event() {
        let team_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let mut member = RepositoryMember::new(team_id, user_id, Role::Member);

        let event = member.change_role(Role::Admin);

        assert_eq!(member.role(), Role::Admin);
        assert_eq!(
            event,
            Some(TeamEvent::MemberRoleChanged {
                team_id,
                user_id,
                from: Role::Member,
                to: Role::Admin,
            })
        );
    }

    #[test]
    fn change_to_same_role_is_a_no_op() {
        let mut member = RepositoryMember::new(Uuid::new_v4(), Uuid::new_v4(), Role::Admin);

        assert!(member.change_role(Role::Admin).is_none());
        assert_eq!(member.role(), Role::Admin);
    }
}
