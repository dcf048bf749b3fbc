//! Shared application state

use std::sync::Arc;

use axum::extract::FromRef;
use chrono::Duration;
use sqlx::PgPool;

use crate::auth::jwt::TokenIssuer;
use crate::config::Config;
use crate::domain::repositories::{MemberRepository, TeamRepository, UserRepository};
use crate::infrastructure::repositories::{
    InMemoryMemberRepository, InMemoryTeamRepository, InMemoryUserRepository,
    PostgresMemberRepository, PostgresTeamRepository, PostgresUserRepository,
};
use crate::services::{MemberService, RepoService};

/// Services and settings handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub repo_service: RepoService,
    pub member_service: MemberService,
    pub users: Arc<dyn UserRepository>,
    pub tokens: TokenIssuer,
    pub bcrypt_cost: u32,
}

impl AppState {
    pub fn new(
        teams: Arc<dyn TeamRepository>,
        users: Arc<dyn UserRepository>,
        members: Arc<dyn MemberRepository>,
        tokens: TokenIssuer,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            repo_service: RepoService::new(teams.clone(), members.clone()),
            member_service: MemberService::new(teams, users.clone(), members),
            users,
            tokens,
            bcrypt_cost,
        }
    }

    /// State backed by PostgreSQL
    pub fn postgres(pool: PgPool, config: &Config) -> Self {
        Self::new(
            Arc::new(PostgresTeamRepository::new(pool.clone())),
            Arc::new(PostgresUserRepository::new(pool.clone())),
            Arc::new(PostgresMemberRepository::new(pool)),
            token_issuer(config),
            config.bcrypt_cost,
        )
    }

    /// State backed by process memory; nothing survives a restart
    pub fn in_memory(config: &Config) -> Self {
        Self::new(
            Arc::new(InMemoryTeamRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryMemberRepository::new()),
            token_issuer(config),
            config.bcrypt_cost,
        )
    }
}

impl FromRef<AppState> for TokenIssuer {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}

fn token_issuer(config: &Config) -> TokenIssuer {
    TokenIssuer::new(&config.jwt_secret, Duration::hours(config.jwt_ttl_hours))
}
