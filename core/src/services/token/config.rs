//! Configuration for the token service

use es_shared::config::JwtConfig;

use crate::domain::entities::token::{DEFAULT_TOKEN_EXPIRY_SECONDS, JWT_ISSUER};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Credential lifetime in seconds
    pub expires_in_seconds: i64,
    /// Expected `iss` claim
    pub issuer: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            expires_in_seconds: DEFAULT_TOKEN_EXPIRY_SECONDS,
            issuer: JWT_ISSUER.to_string(),
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            expires_in_seconds: config.expires_in_seconds,
            issuer: config.issuer.clone(),
        }
    }
}
