//! MySQL-specific database implementations
//!
//! This module contains MySQL implementations of repository traits
//! using SQLx for database operations.

pub mod course_repository_impl;
pub mod enrollment_repository_impl;
pub mod lesson_repository_impl;
pub mod progress_repository_impl;
pub mod resource_repository_impl;
pub mod section_repository_impl;
pub mod store;
pub mod user_repository_impl;

use std::sync::Arc;

use sqlx::MySqlPool;

use es_core::repositories::Repositories;

// Re-export the MySQL implementations
pub use course_repository_impl::MySqlCourseRepository;
pub use enrollment_repository_impl::MySqlEnrollmentRepository;
pub use lesson_repository_impl::MySqlLessonRepository;
pub use progress_repository_impl::MySqlProgressRepository;
pub use resource_repository_impl::MySqlResourceRepository;
pub use section_repository_impl::MySqlSectionRepository;
pub use store::MySqlStore;
pub use user_repository_impl::MySqlUserRepository;

/// Every repository backed by the given pool
pub fn mysql_repositories(pool: &MySqlPool) -> Repositories {
    Repositories {
        users: Arc::new(MySqlUserRepository::new(pool.clone())),
        courses: Arc::new(MySqlCourseRepository::new(pool.clone())),
        sections: Arc::new(MySqlSectionRepository::new(pool.clone())),
        lessons: Arc::new(MySqlLessonRepository::new(pool.clone())),
        resources: Arc::new(MySqlResourceRepository::new(pool.clone())),
        enrollments: Arc::new(MySqlEnrollmentRepository::new(pool.clone())),
        progress: Arc::new(MySqlProgressRepository::new(pool.clone())),
    }
}
