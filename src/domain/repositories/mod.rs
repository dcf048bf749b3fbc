// Repository ports
// Implemented by adapters in infrastructure::repositories

pub mod member_repository;
pub mod team_repository;
pub mod user_repository;

pub use member_repository::MemberRepository;
pub use team_repository::{SaveOutcome, TeamRepository};
pub use user_repository::{User, UserRepository};
