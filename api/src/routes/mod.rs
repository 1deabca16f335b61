//! HTTP route handlers grouped by resource.

pub mod auth;
pub mod courses;
pub mod enrollments;
pub mod health;
pub mod progress;
pub mod student;
