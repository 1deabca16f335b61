//! Repository interfaces and their in-memory implementations.
//!
//! Each entity has a trait (`trait.rs`) implemented by the MySQL layer in
//! `es_infra` and by an in-memory `Mock*Repository` (`mock.rs`) built on
//! [`store::MemoryStore`].

pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod progress;
pub mod resource;
pub mod section;
pub mod store;
pub mod user;

pub use course::{CourseRepository, MockCourseRepository};
pub use enrollment::{EnrollmentRepository, MockEnrollmentRepository};
pub use lesson::{LessonRepository, MockLessonRepository};
pub use progress::{MockProgressRepository, ProgressRepository};
pub use resource::{MockResourceRepository, ResourceRepository};
pub use section::{MockSectionRepository, SectionRepository};
pub use store::MemoryStore;
pub use user::{MockUserRepository, UserRepository};

use std::sync::Arc;

/// Every repository the services need, behind trait objects
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub courses: Arc<dyn CourseRepository>,
    pub sections: Arc<dyn SectionRepository>,
    pub lessons: Arc<dyn LessonRepository>,
    pub resources: Arc<dyn ResourceRepository>,
    pub enrollments: Arc<dyn EnrollmentRepository>,
    pub progress: Arc<dyn ProgressRepository>,
}

impl Repositories {
    /// In-memory repositories, for tests and database-less runs
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(MockUserRepository::new()),
            courses: Arc::new(MockCourseRepository::new()),
            sections: Arc::new(MockSectionRepository::new()),
            lessons: Arc::new(MockLessonRepository::new()),
            resources: Arc::new(MockResourceRepository::new()),
            enrollments: Arc::new(MockEnrollmentRepository::new()),
            progress: Arc::new(MockProgressRepository::new()),
        }
    }
}
