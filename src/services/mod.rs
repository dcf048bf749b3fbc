// Application services
// Orchestrate repository lookups and enforce authorization rules

mod access;
pub mod errors;
pub mod member_service;
pub mod repo_service;

pub use errors::{ServiceError, ServiceResult};
pub use member_service::{InviteMemberRequest, MemberService, UpdateRoleRequest};
pub use repo_service::RepoService;
