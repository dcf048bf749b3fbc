use serde::{Deserialize, Serialize};
use std::fmt;

/// Email address of a user, normalized to lowercase
///
/// # Invariants
/// - Exactly one '@' with a non-empty local part and domain
/// - No whitespace
/// - Stored trimmed and lower-cased, so lookups are case-insensitive
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Parses and normalizes an email address
    ///
    /// # Example
    /// ```
    /// use serve_api::domain::user::value_objects::Email;
    ///
    /// let email = Email::new("  Dev@Example.COM ").expect("valid email");
    /// assert_eq!(email.as_str(), "dev@example.com");
    /// assert!(Email::new("no-at-sign").is_err());
    /// ```
    pub fn new(email: impl AsRef<str>) -> Result<Self, String> {
        let normalized = email.as_ref().trim().to_lowercase();

        let valid = match normalized.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.is_empty()
                    && !domain.contains('@')
                    && !normalized.chars().any(char::is_whitespace)
            }
            None => false,
        };

        if valid {
            Ok(Email(normalized))
        } else {
            Err(format!("Invalid email: {}", email.as_ref()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
