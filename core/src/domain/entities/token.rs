//! JWT claims for bearer credentials.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::{User, UserRole};

/// Default credential lifetime (7 days)
pub const DEFAULT_TOKEN_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// JWT issuer
pub const JWT_ISSUER: &str = "edusync";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// User ID, duplicated for clients reading `{id, email, role}`
    pub id: String,

    pub email: String,

    pub role: UserRole,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Creates claims for `user` valid for `expires_in_seconds`
    pub fn for_user(user: &User, issuer: &str, expires_in_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(expires_in_seconds);
        let id = user.id.to_string();

        Self {
            sub: id.clone(),
            id,
            email: user.email.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
        }
    }

    /// Parses the subject as a user id
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }

    /// Checks if the token is expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}
