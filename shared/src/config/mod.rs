//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT and password hashing configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `media` - Media host (Cloudinary) credentials and endpoints
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod media;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig};
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use media::MediaConfig;
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Media host configuration
    pub media: MediaConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            media: MediaConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            media: MediaConfig::from_env(),
            cors: CorsConfig::from_env(),
        }
    }

    /// Load configuration from the environment, then overlay the optional
    /// per-environment TOML file (e.g. `config.production.toml`).
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let base = Self::from_env();
        let file = base.environment.config_file().to_string();

        ::config::Config::builder()
            .add_source(::config::Config::try_from(&base)?)
            .add_source(::config::File::with_name(&file).required(false))
            .build()?
            .try_deserialize()
    }

    /// Whether the process runs in production
    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
