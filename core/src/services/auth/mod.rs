//! Authentication service module
//!
//! Registration, login and current-user lookup over the user repository,
//! with bcrypt password hashing and JWT issuance.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::{AuthService, RegisterInput};
