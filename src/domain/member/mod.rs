// Membership domain module

#![allow(clippy::module_inception)]

pub mod member;
pub mod role;

pub use member::RepositoryMember;
pub use role::Role;
