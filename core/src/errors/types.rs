//! Error types for authentication, token handling and input validation

use es_shared::FieldError;
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown email and wrong password share this variant
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User with this email already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Password hashing failed: {message}")]
    PasswordHashing { message: String },
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Invalid claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    /// One or more fields failed their rules
    #[error("Validation failed")]
    Fields(Vec<FieldError>),
}

impl ValidationError {
    /// Field-level details for the response envelope
    pub fn field_errors(&self) -> Vec<FieldError> {
        match self {
            ValidationError::Fields(errors) => errors.clone(),
        }
    }
}

impl From<Vec<FieldError>> for ValidationError {
    fn from(errors: Vec<FieldError>) -> Self {
        ValidationError::Fields(errors)
    }
}
