use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::member::RepositoryMember;

/// Repository trait for team memberships
///
/// A membership is keyed by `(team_id, user_id)`.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Save a membership (insert, or update the role of an existing one)
    async fn save(&self, member: &RepositoryMember) -> Result<(), String>;

    /// Find the membership of a user in a team
    async fn find_by_team_and_user(
        &self,
        team_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<RepositoryMember>, String>;

    /// Find all members of a team, oldest first
    async fn find_by_team(&self, team_id: Uuid) -> Result<Vec<RepositoryMember>, String>;

    /// Delete a single membership
    async fn delete(&self, team_id: Uuid, user_id: Uuid) -> Result<(), String>;

    /// Delete every membership of a team
    async fn delete_by_team(&self, team_id: Uuid) -> Result<(), String>;
}
