use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::team::Team;

/// Result of a successful `TeamRepository::save` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// Another team already holds this name; nothing was written
    NameTaken,
}

/// Repository trait for Team aggregate
///
/// Defines the contract for persisting and retrieving teams.
/// Implementations should handle database-specific details.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Save a team (insert or update)
    ///
    /// A name held by a different team is reported as `SaveOutcome::NameTaken`
    /// rather than as an error, so a check-then-save race still resolves to a
    /// duplicate name.
    async fn save(&self, team: &Team) -> Result<SaveOutcome, String>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, String>;

    /// Find a team by its exact name
    async fn find_by_name(&self, name: &str) -> Result<Option<Team>, String>;

    /// Find all teams owned by a user, newest first
    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Team>, String>;

    /// Delete a team by ID
    async fn delete(&self, id: Uuid) -> Result<(), String>;
}
