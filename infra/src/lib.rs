//! # Infrastructure Layer
//! 
//! This crate implements the infrastructure layer for the EduSync backend,
//! following Clean Architecture principles. It provides concrete implementations
//! of the repository and media gateway traits defined in `es_core`.
//!
//! ## Architecture
//! 
//! The infrastructure layer contains:
//! - **Database**: MySQL implementations using SQLx, plus schema migrations
//! - **Media**: Cloudinary upload/delete/streaming gateway over reqwest
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)
//! - `cloudinary`: Enable the Cloudinary media gateway (default)

use es_core::errors::DomainError;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Media module - Cloudinary media host
#[cfg(feature = "cloudinary")]
pub mod media;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Http(e) => DomainError::upstream(e.to_string()),
            InfrastructureError::Config(message) => DomainError::internal(message),
            other => DomainError::database(other.to_string()),
        }
    }
}
