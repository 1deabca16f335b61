//! Progress service module
//!
//! Watch-time tracking for enrolled students and per-course completion
//! aggregation.

mod service;

#[cfg(test)]
mod tests;

pub use service::{ProgressService, UpdateProgressInput};
