//! Shared utilities and common types for the EduSync server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - The JSON response envelope
//! - Input validation helpers

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use crate::config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig, MediaConfig,
    ServerConfig,
};
pub use types::{ApiResponse, FieldError};
pub use utils::validation;
