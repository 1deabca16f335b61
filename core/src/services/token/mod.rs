//! Token service module for JWT management
//!
//! Issues and verifies the HS256 bearer credentials carried by every
//! protected request.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
