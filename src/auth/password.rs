// Password hashing utilities
// Uses bcrypt for secure password hashing

use bcrypt::{hash, verify};

/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LEN: usize = 8;

/// Rejects passwords shorter than `MIN_PASSWORD_LEN`
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }

    Ok(())
}

/// Hashes a password using bcrypt with the given cost
///
/// # Example
/// ```
/// use serve_api::auth::password::{hash_password, verify_password};
///
/// let hash = hash_password("my_password", 4).expect("valid hash");
/// assert!(verify_password("my_password", &hash).unwrap());
/// ```
pub fn hash_password(password: &str, cost: u32) -> Result<String, String> {
    hash(password, cost).map_err(|e| e.to_string())
}

/// Verifies a password against a bcrypt hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, String> {
    verify(password, hash).map_err(|e| e.to_string())
}
