use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::member::{RepositoryMember, Role};
use crate::domain::repositories::MemberRepository;

/// PostgreSQL implementation of MemberRepository
pub struct PostgresMemberRepository {
    pool: PgPool,
}

impl PostgresMemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MemberRow {
    team_id: Uuid,
    user_id: Uuid,
    role: Role,
    joined_at: DateTime<Utc>,
}

impl From<MemberRow> for RepositoryMember {
    fn from(r: MemberRow) -> Self {
        RepositoryMember::from_persistence(r.team_id, r.user_id, r.role, r.joined_at)
    }
}

#[async_trait]
impl MemberRepository for PostgresMemberRepository {
    async fn save(&self, member: &RepositoryMember) -> Result<(), String> {
        sqlx::query(
            r#"
            INSERT INTO repository_members (team_id, user_id, role, joined_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (team_id, user_id) DO UPDATE SET
                role = EXCLUDED.role
            "#,
        )
        .bind(member.team_id())
        .bind(member.user_id())
        .bind(member.role())
        .bind(member.joined_at())
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save member: {}", e))?;

        Ok(())
    }

    async fn find_by_team_and_user(
        &self,
        team_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<RepositoryMember>, String> {
        let row = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT team_id, user_id, role, joined_at
            FROM repository_members
            WHERE team_id = $1 AND user_id = $2
            "#,
        )
        .bind(team_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find member: {}", e))?;

        Ok(row.map(RepositoryMember::from))
    }

    async fn find_by_team(&self, team_id: Uuid) -> Result<Vec<RepositoryMember>, String> {
        let rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT team_id, user_id, role, joined_at
            FROM repository_members
            WHERE team_id = $1
            ORDER BY joined_at
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find members by team: {}", e))?;

        Ok(rows.into_iter().map(RepositoryMember::from).collect())
    }

    async fn delete(&self, team_id: Uuid, user_id: Uuid) -> Result<(), String> {
        let result = sqlx::query(
            "DELETE FROM repository_members WHERE team_id = $1 AND user_id = $2",
        )
        .bind(team_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to delete member: {}", e))?;

        if result.rows_affected() == 0 {
            return Err(format!("Member not found: {}", user_id));
        }

        Ok(())
    }

    async fn delete_by_team(&self, team_id: Uuid) -> Result<(), String> {
        sqlx::query("DELETE FROM repository_members WHERE team_id = $1")
            .bind(team_id)
            .execute(&self.pool)
            .await
            .map_err(|e| format!("Failed to delete members of team: {}", e))?;

        Ok(())
    }
}
