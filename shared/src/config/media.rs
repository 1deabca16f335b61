//! Media hosting configuration

use serde::{Deserialize, Serialize};

/// Cloudinary media host configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaConfig {
    /// Cloud name (account namespace)
    pub cloud_name: String,

    /// API key
    pub api_key: String,

    /// API secret used to sign requests
    pub api_secret: String,

    /// Root folder every upload is namespaced under
    #[serde(default = "default_root_folder")]
    pub root_folder: String,

    /// Upload API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Delivery base URL for generated streaming URLs
    #[serde(default = "default_delivery_base_url")]
    pub delivery_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            cloud_name: String::new(),
            api_key: String::new(),
            api_secret: String::new(),
            root_folder: default_root_folder(),
            api_base_url: default_api_base_url(),
            delivery_base_url: default_delivery_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl MediaConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cloud_name: std::env::var("CLOUDINARY_CLOUD_NAME").unwrap_or_default(),
            api_key: std::env::var("CLOUDINARY_API_KEY").unwrap_or_default(),
            api_secret: std::env::var("CLOUDINARY_API_SECRET").unwrap_or_default(),
            root_folder: std::env::var("MEDIA_ROOT_FOLDER").unwrap_or(defaults.root_folder),
            api_base_url: std::env::var("CLOUDINARY_API_BASE_URL").unwrap_or(defaults.api_base_url),
            delivery_base_url: std::env::var("CLOUDINARY_DELIVERY_BASE_URL")
                .unwrap_or(defaults.delivery_base_url),
            timeout_seconds: std::env::var("MEDIA_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_seconds),
        }
    }

    /// Whether credentials are present
    pub fn is_configured(&self) -> bool {
        !self.cloud_name.is_empty() && !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

fn default_root_folder() -> String {
    String::from("edusync")
}

fn default_api_base_url() -> String {
    String::from("https://api.cloudinary.com")
}

fn default_delivery_base_url() -> String {
    String::from("https://res.cloudinary.com")
}

fn default_timeout_seconds() -> u64 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_by_default() {
        let config = MediaConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.root_folder, "edusync");
    }
}
