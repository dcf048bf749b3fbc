// Authentication helpers: JWT tokens and password hashing

pub mod jwt;
pub mod password;
