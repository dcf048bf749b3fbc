use super::events::TeamEvent;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Team aggregate root
///
/// A team is the "repository" users collaborate in: a named project
/// container with exactly one owner.
///
/// # Invariants
/// - Name is trimmed and cannot be empty
/// - The owner is fixed at creation time; there is no way to reassign it
///
/// # Example
/// ```
/// use serve_api::domain::team::Team;
/// use uuid::Uuid;
///
/// let owner = Uuid::new_v4();
/// let (team, events) = Team::new("  backend  ", "Backend services", owner)
///     .expect("valid team");
///
/// assert_eq!(team.name(), "backend");
/// assert!(team.is_owner(owner));
/// assert_eq!(events.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Team {
    id: Uuid,
    name: String,
    description: String,
    owner_id: Uuid,
    created_at: DateTime<Utc>,
}

impl Team {
    /// Maximum length of a team name, in characters
    pub const MAX_NAME_LEN: usize = 100;

    /// Creates a new Team aggregate
    ///
    /// # Arguments
    /// * `name` - Unique repository name (trimmed, cannot be empty)
    /// * `description` - Free-form description, may be empty
    /// * `owner_id` - The user who owns the repository
    ///
    /// # Returns
    /// * `Ok((Team, Vec<TeamEvent>))` - New team and the Created event
    /// * `Err(String)` - If the name is empty or too long
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        owner_id: Uuid,
    ) -> Result<(Self, Vec<TeamEvent>), String> {
        let name = name.into().trim().to_string();

        if name.is_empty() {
            return Err("저장소 이름은 비어 있을 수 없습니다.".to_string());
        }

        if name.chars().count() > Self::MAX_NAME_LEN {
            return Err(format!(
                "저장소 이름은 {}자를 넘을 수 없습니다.",
                Self::MAX_NAME_LEN
            ));
        }

        let team = Self {
            id: Uuid::new_v4(),
            name,
            description: description.into(),
            owner_id,
            created_at: Utc::now(),
        };

        let events = vec![TeamEvent::Created {
            team_id: team.id,
            name: team.name.clone(),
            owner_id: team.owner_id,
        }];

        Ok((team, events))
    }

    /// Returns true if `user_id` owns this team
    pub fn is_owner(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn owner_id(&self) -> Uuid {
        self.owner_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Team from stored data without re-validating it.
    ///
    /// Only repository implementations should call this.
    pub fn from_persistence(
        id: Uuid,
        name: String,
        description: String,
        owner_id: Uuid,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            owner_id,
            created_at,
        }
    }
}
