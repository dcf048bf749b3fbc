//! In-memory repository adapters
//!
//! Used by the `memory` storage backend and by tests. Each call takes the
//! lock once, so every operation is atomic with respect to the others.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::member::RepositoryMember;
use crate::domain::repositories::{
    MemberRepository, SaveOutcome, TeamRepository, User, UserRepository,
};
use crate::domain::team::Team;
use crate::domain::user::Email;

/// In-memory implementation of TeamRepository
#[derive(Debug, Default)]
pub struct InMemoryTeamRepository {
    teams: RwLock<HashMap<Uuid, Team>>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored teams
    pub async fn count(&self) -> usize {
        self.teams.read().await.len()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn save(&self, team: &Team) -> Result<SaveOutcome, String> {
        let mut teams = self.teams.write().await;

        // mirrors the UNIQUE constraint on teams.name
        if teams
            .values()
            .any(|t| t.name() == team.name() && t.id() != team.id())
        {
            return Ok(SaveOutcome::NameTaken);
        }

        teams.insert(team.id(), team.clone());
        Ok(SaveOutcome::Saved)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, String> {
        Ok(self.teams.read().await.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Team>, String> {
        Ok(self
            .teams
            .read()
            .await
            .values()
            .find(|t| t.name() == name)
            .cloned())
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Team>, String> {
        let mut owned: Vec<Team> = self
            .teams
            .read()
            .await
            .values()
            .filter(|t| t.is_owner(owner_id))
            .cloned()
            .collect();

        owned.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(owned)
    }

    async fn delete(&self, id: Uuid) -> Result<(), String> {
        match self.teams.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(format!("Team not found: {}", id)),
        }
    }
}

/// In-memory implementation of UserRepository
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<Uuid, String> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(format!(
                "Failed to create user: duplicate email {}",
                user.email
            ));
        }

        let id = user.id;
        users.insert(id, user);
        Ok(id)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, String> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, String> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn update_last_login(&self, user_id: Uuid) -> Result<(), String> {
        match self.users.write().await.get_mut(&user_id) {
            Some(user) => {
                user.last_login = Some(Utc::now());
                Ok(())
            }
            None => Err(format!("User not found: {}", user_id)),
        }
    }
}

/// In-memory implementation of MemberRepository
#[derive(Debug, Default)]
pub struct InMemoryMemberRepository {
    members: RwLock<HashMap<(Uuid, Uuid), RepositoryMember>>,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn save(&self, member: &RepositoryMember) -> Result<(), String> {
        self.members
            .write()
            .await
            .insert((member.team_id(), member.user_id()), member.clone());
        Ok(())
    }

    async fn find_by_team_and_user(
        &self,
        team_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<RepositoryMember>, String> {
        Ok(self.members.read().await.get(&(team_id, user_id)).cloned())
    }

    async fn find_by_team(&self, team_id: Uuid) -> Result<Vec<RepositoryMember>, String> {
        let mut members: Vec<RepositoryMember> = self
            .members
            .read()
            .await
            .values()
            .filter(|m| m.team_id() == team_id)
            .cloned()
            .collect();

        members.sort_by_key(|m| m.joined_at());
        Ok(members)
    }

    async fn delete(&self, team_id: Uuid, user_id: Uuid) -> Result<(), String> {
        match self.members.write().await.remove(&(team_id, user_id)) {
            Some(_) => Ok(()),
            None => Err(format!("Member not found: {}", user_id)),
        }
    }

    async fn delete_by_team(&self, team_id: Uuid) -> Result<(), String> {
        self.members
            .write()
            .await
            .retain(|(team, _), _| *team != team_id);
        Ok(())
    }
}
