// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory;
pub mod postgres_member_repository;
pub mod postgres_team_repository;
pub mod postgres_user_repository;

pub use in_memory::{InMemoryMemberRepository, InMemoryTeamRepository, InMemoryUserRepository};
pub use postgres_member_repository::PostgresMemberRepository;
pub use postgres_team_repository::PostgresTeamRepository;
pub use postgres_user_repository::PostgresUserRepository;
