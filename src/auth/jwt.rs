// JWT token creation and verification
// Tokens identify the acting user for every repository operation

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims structure
///
/// # Fields
/// * `sub` - Subject (user_id)
/// * `iat` - Issued-at time (seconds since epoch)
/// * `exp` - Expiry time (seconds since epoch)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies HS256 tokens with a fixed secret and lifetime
///
/// # Example
/// ```
/// use chrono::Duration;
/// use serve_api::auth::jwt::TokenIssuer;
/// use uuid::Uuid;
///
/// let issuer = TokenIssuer::new("your-secret-key", Duration::hours(8));
/// let user_id = Uuid::new_v4();
///
/// let token = issuer.issue(user_id).expect("valid token");
/// let claims = issuer.verify(&token).expect("valid token");
/// assert_eq!(claims.sub, user_id);
/// ```
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Creates a token for `user_id` expiring after the configured lifetime
    pub fn issue(&self, user_id: Uuid) -> Result<String, String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(|e| e.to_string())
    }

    /// Verifies the signature and expiry of a token and returns its claims
    pub fn verify(&self, token: &str) -> Result<Claims, String> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| e.to_string())
    }
}
