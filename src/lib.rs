//! SeRVe API Library
//!
//! Repository (team) management backend: repository creation, membership
//! roles and the authorization rules guarding them.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;
