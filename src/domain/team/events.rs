use uuid::Uuid;

use crate::domain::member::Role;

/// Domain events raised by teams and their memberships
///
/// Services log every event they produce, which gives an audit trail of
/// who changed what in a repository.
///
/// # Example
/// ```
/// use serve_api::domain::team::events::TeamEvent;
/// use uuid::Uuid;
///
/// let team_id = Uuid::new_v4();
/// let event = TeamEvent::MemberKicked {
///     team_id,
///     user_id: Uuid::new_v4(),
///     kicked_by: Uuid::new_v4(),
/// };
/// assert_eq!(event.team_id(), team_id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamEvent {
    /// Fired when a repository is created
    Created {
        team_id: Uuid,
        name: String,
        owner_id: Uuid,
    },
    /// Fired when the owner deletes a repository
    Deleted { team_id: Uuid },
    /// Fired when a user is added to a repository
    MemberInvited {
        team_id: Uuid,
        user_id: Uuid,
        role: Role,
    },
    /// Fired when a member's role actually changes
    MemberRoleChanged {
        team_id: Uuid,
        user_id: Uuid,
        from: Role,
        to: Role,
    },
    /// Fired when a member is removed from a repository
    MemberKicked {
        team_id: Uuid,
        user_id: Uuid,
        kicked_by: Uuid,
    },
}

impl TeamEvent {
    /// Returns the team_id for this event
    pub fn team_id(&self) -> Uuid {
        match self {
            TeamEvent::Created { team_id, .. }
            | TeamEvent::Deleted { team_id }
            | TeamEvent::MemberInvited { team_id, .. }
            | TeamEvent::MemberRoleChanged { team_id, .. }
            | TeamEvent::MemberKicked { team_id, .. } => *team_id,
        }
    }

    /// Writes the event to the log
    pub fn record(&self) {
        tracing::info!(team_id = %self.team_id(), event = ?self, "team event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_reports_its_team() {
        let team_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();

        let events = [
            TeamEvent::Created {
                team_id,
                name: "repo".to_string(),
                owner_id: user_id,
            },
            TeamEvent::Deleted { team_id },
            TeamEvent::MemberInvited {
                team_id,
                user_id,
                role: Role::Member,
            },
            TeamEvent::MemberRoleChanged {
                team_id,
                user_id,
                from: Role::Member,
                to: Role::Admin,
            },
            TeamEvent::MemberKicked {
                team_id,
                user_id,
                kicked_by: Uuid::new_v4(),
            },
        ];

        for event in &events {
            assert_eq!(event.team_id(), team_id);
        }
    }
}
