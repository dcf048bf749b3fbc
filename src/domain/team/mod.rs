// Team domain module
// Contains the team aggregate root and the domain events it raises

#![allow(clippy::module_inception)]

pub mod events;
pub mod team;

pub use events::TeamEvent;
pub use team::Team;
