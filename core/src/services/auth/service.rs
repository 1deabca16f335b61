//! Main authentication service implementation

use std::sync::Arc;

use es_shared::validation::normalize_email;
use uuid::Uuid;

use crate::domain::entities::user::{User, UserRole};
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Registration data, already checked for shape by the caller
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: UserRole,
}

/// Authentication service for registration, login and identity lookup
pub struct AuthService {
    /// User repository for database operations
    user_repository: Arc<dyn UserRepository>,
    /// Token service for JWT issuance
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl AuthService {
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            config,
        }
    }

    /// Register a new account and sign it in
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - The sanitized user and a bearer credential
    /// * `Err(DomainError::Auth(UserAlreadyExists))` - Email taken (any case)
    pub async fn register(&self, input: RegisterInput) -> DomainResult<AuthResponse> {
        let email = normalize_email(&input.email);

        if self.user_repository.exists_by_email(&email).await? {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = self.hash_password(input.password).await?;
        let user = User::new(email, password_hash, input.name.trim().to_string(), input.role);

        // The unique index still decides when two registrations race
        let user = self
            .user_repository
            .create(user)
            .await
            .map_err(|e| match e {
                DomainError::Conflict { .. } => AuthError::UserAlreadyExists.into(),
                other => other,
            })?;

        tracing::info!(user_id = %user.id, role = %user.role, "User registered");

        let token = self.token_service.issue(&user)?;
        Ok(AuthResponse::new(user, token))
    }

    /// Authenticate with email and password
    ///
    /// Unknown email and wrong password produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let email = normalize_email(email);

        let user = self
            .user_repository
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self
            .verify_password(password.to_string(), user.password_hash.clone())
            .await?
        {
            tracing::debug!(user_id = %user.id, "Password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!(user_id = %user.id, "User logged in");

        let token = self.token_service.issue(&user)?;
        Ok(AuthResponse::new(user, token))
    }

    /// Look up the account behind a verified credential
    pub async fn get_me(&self, user_id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotFound.into())
    }

    async fn hash_password(&self, password: String) -> DomainResult<String> {
        let cost = self.config.bcrypt_cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| DomainError::internal(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| {
                AuthError::PasswordHashing {
                    message: e.to_string(),
                }
                .into()
            })
    }

    async fn verify_password(&self, password: String, hash: String) -> DomainResult<bool> {
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("Password verification task failed: {}", e)))?
            .map_err(|e| {
                AuthError::PasswordHashing {
                    message: e.to_string(),
                }
                .into()
            })
    }
}
