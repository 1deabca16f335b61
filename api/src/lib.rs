//! EduSync HTTP API
//!
//! actix-web application exposing authentication, the course catalog,
//! enrollments, progress tracking and offline download manifests.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
