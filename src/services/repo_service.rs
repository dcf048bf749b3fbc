use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use super::access;
use super::errors::{ServiceError, ServiceResult};
use crate::domain::repositories::{MemberRepository, SaveOutcome, TeamRepository};
use crate::domain::team::{Team, TeamEvent};

/// Creates, reads and deletes repositories (teams)
#[derive(Clone)]
pub struct RepoService {
    teams: Arc<dyn TeamRepository>,
    members: Arc<dyn MemberRepository>,
}

impl RepoService {
    pub fn new(teams: Arc<dyn TeamRepository>, members: Arc<dyn MemberRepository>) -> Self {
        Self { teams, members }
    }

    /// Creates a repository owned by `owner_id` and returns its generated id
    ///
    /// Fails with `DuplicateName` without writing anything if the name is
    /// already taken, including when a concurrent create claims it first. Only the team row is written; the owner's authority
    /// comes from the team itself, not from a member row.
    pub async fn create_repository(
        &self,
        name: &str,
        description: &str,
        owner_id: Uuid,
    ) -> ServiceResult<Uuid> {
        let (team, events) =
            Team::new(name, description, owner_id).map_err(ServiceError::Validation)?;

        if self.teams.find_by_name(team.name()).await?.is_some() {
            debug!(name = %team.name(), "repository name already taken");
            return Err(ServiceError::DuplicateName);
        }

        if self.teams.save(&team).await? == SaveOutcome::NameTaken {
            debug!(name = %team.name(), "repository name taken by a concurrent create");
            return Err(ServiceError::DuplicateName);
        }
        events.iter().for_each(TeamEvent::record);

        info!(team_id = %team.id(), owner_id = %owner_id, "repository created");
        Ok(team.id())
    }

    /// Returns a repository the acting user owns or belongs to
    pub async fn get_repository(&self, team_id: Uuid, acting_user_id: Uuid) -> ServiceResult<Team> {
        let team = self.load_team(team_id).await?;
        access::require_member(self.members.as_ref(), &team, acting_user_id).await?;
        Ok(team)
    }

    /// Lists the repositories owned by a user, newest first
    pub async fn list_owned(&self, owner_id: Uuid) -> ServiceResult<Vec<Team>> {
        Ok(self.teams.find_by_owner(owner_id).await?)
    }

    /// Deletes a repository and all of its memberships. Owner only.
    pub async fn delete_repository(&self, team_id: Uuid, acting_user_id: Uuid) -> ServiceResult<()> {
        let team = self.load_team(team_id).await?;

        if !team.is_owner(acting_user_id) {
            return Err(ServiceError::OwnerRequired);
        }

        // team first: a failed team delete must leave the memberships intact
        self.teams.delete(team_id).await?;
        self.members.delete_by_team(team_id).await?;
        TeamEvent::Deleted { team_id }.record();

        Ok(())
    }

    async fn load_team(&self, team_id: Uuid) -> ServiceResult<Team> {
        self.teams
            .find_by_id(team_id)
            .await?
            .ok_or(ServiceError::RepositoryNotFound(team_id))
    }
}
