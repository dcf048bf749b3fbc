use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::repositories::{SaveOutcome, TeamRepository};
use crate::domain::team::Team;

/// PostgreSQL implementation of TeamRepository
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TeamRow {
    id: Uuid,
    name: String,
    description: String,
    owner_id: Uuid,
    created_at: DateTime<Utc>,
}

impl From<TeamRow> for Team {
    fn from(r: TeamRow) -> Self {
        Team::from_persistence(r.id, r.name, r.description, r.owner_id, r.created_at)
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn save(&self, team: &Team) -> Result<SaveOutcome, String> {
        // owner_id is never updated
        let result = sqlx::query(
            r#"
            INSERT INTO teams (id, name, description, owner_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description
            "#,
        )
        .bind(team.id())
        .bind(team.name())
        .bind(team.description())
        .bind(team.owner_id())
        .bind(team.created_at())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(SaveOutcome::Saved),
            // teams.name is the only unique key besides id
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Ok(SaveOutcome::NameTaken)
            }
            Err(e) => Err(format!("Failed to save team: {}", e)),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, String> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT id, name, description, owner_id, created_at
            FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find team by id: {}", e))?;

        Ok(row.map(Team::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Team>, String> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT id, name, description, owner_id, created_at
            FROM teams
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find team by name: {}", e))?;

        Ok(row.map(Team::from))
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Team>, String> {
        let rows = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT id, name, description, owner_id, created_at
            FROM teams
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find teams by owner: {}", e))?;

        Ok(rows.into_iter().map(Team::from).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<(), String> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| format!("Failed to delete team: {}", e))?;

        if result.rows_affected() == 0 {
            return Err(format!("Team not found: {}", id));
        }

        Ok(())
    }
}
