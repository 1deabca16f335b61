//! Database module - MySQL implementations using SQLx
//! 
//! This module provides database access layer implementations including:
//! - Connection pool management and migrations
//! - Repository pattern implementations for every entity

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{
    mysql_repositories, MySqlCourseRepository, MySqlEnrollmentRepository, MySqlLessonRepository,
    MySqlProgressRepository, MySqlResourceRepository, MySqlSectionRepository, MySqlUserRepository,
};
