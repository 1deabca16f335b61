//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    BusinessRule { message: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("{message}")]
    Conflict { message: String },

    #[error("{message}")]
    Forbidden { message: String },

    #[error("Unauthorized access")]
    Unauthorized,

    /// Media host failure
    #[error("Upstream failure: {message}")]
    Upstream { message: String },

    /// Persistence failure
    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        DomainError::Forbidden {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        DomainError::Conflict {
            message: message.into(),
        }
    }

    pub fn business_rule(message: impl Into<String>) -> Self {
        DomainError::BusinessRule {
            message: message.into(),
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        DomainError::Upstream {
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        DomainError::Database {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    /// Whether the error originates outside the domain (host, database, bug)
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            DomainError::Upstream { .. }
                | DomainError::Database { .. }
                | DomainError::Internal { .. }
                | DomainError::Auth(AuthError::PasswordHashing { .. })
                | DomainError::Token(TokenError::TokenGenerationFailed)
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;
    use es_shared::FieldError;

    #[test]
    fn test_not_found_message() {
        assert_eq!(DomainError::not_found("Course").to_string(), "Course not found");
    }

    #[test]
    fn test_bridged_errors_are_transparent() {
        let err: DomainError = AuthError::InvalidCredentials.into();
        assert_eq!(err.to_string(), "Invalid email or password");

        let err: DomainError = ValidationError::Fields(vec![FieldError::new("title", "too short")]).into();
        assert_eq!(err.to_string(), "Validation failed");
    }

    #[test]
    fn test_server_error_classification() {
        assert!(DomainError::upstream("cloudinary down").is_server_error());
        assert!(DomainError::database("gone").is_server_error());
        assert!(!DomainError::conflict("dup").is_server_error());
        assert!(!DomainError::Token(TokenError::TokenExpired).is_server_error());
    }
}
