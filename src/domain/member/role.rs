use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Privilege level of a repository member
///
/// The team owner is not a separate role: owners always act as `Admin`,
/// and their membership can never be lowered to anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "member_role", rename_all = "UPPERCASE")]
pub enum Role {
    /// Can invite, re-role and kick members
    Admin,
    /// Can read the repository
    Member,
}

impl Role {
    /// Every role, highest privilege first
    pub const ALL: [Role; 2] = [Role::Admin, Role::Member];

    /// Whether this role may invite, re-role or kick other members
    ///
    /// # Example
    /// ```
    /// use serve_api::domain::member::Role;
    ///
    /// assert!(Role::Admin.can_manage_members());
    /// assert!(!Role::Member.can_manage_members());
    /// ```
    pub fn can_manage_members(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Member => "MEMBER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "MEMBER" => Ok(Role::Member),
            _ => Err(format!("유효하지 않은 권한입니다: {}", s)),
        }
    }
}
