// HTTP handlers

pub mod auth;
pub mod members;
pub mod repositories;
