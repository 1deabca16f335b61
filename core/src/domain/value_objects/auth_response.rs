//! Authentication response value object for API responses.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::User;

/// Returned by register and login: the sanitized user plus a bearer credential
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    /// User without its password hash (the hash is never serialized)
    pub user: User,

    /// Signed JWT
    pub token: String,
}

impl AuthResponse {
    pub fn new(user: User, token: String) -> Self {
        Self { user, token }
    }
}
