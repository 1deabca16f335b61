//! Course repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::course::Course;
use crate::errors::DomainError;

/// Persistence for courses and their section/resource id lists
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, DomainError>;

    async fn create(&self, course: Course) -> Result<Course, DomainError>;

    /// Persist the scalar fields of an existing course (id lists untouched)
    ///
    /// Fails with `NotFound` when the course does not exist.
    async fn update(&self, course: Course) -> Result<Course, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// All courses of an instructor, any publish state, newest first
    async fn find_by_instructor(&self, instructor_id: Uuid) -> Result<Vec<Course>, DomainError>;

    /// Published courses, newest first
    async fn find_published(&self) -> Result<Vec<Course>, DomainError>;

    /// Published courses whose title or description match any search term
    async fn search_published(&self, query: &str) -> Result<Vec<Course>, DomainError>;

    /// Append `section_id` to the course's section list if not already there
    ///
    /// Runs as one atomic step so concurrent appends cannot drop an id.
    /// Returns `false` when the course does not exist.
    async fn append_section(&self, course_id: Uuid, section_id: Uuid) -> Result<bool, DomainError>;

    /// Append `resource_id` to the course's resource list if not already there
    async fn append_resource(&self, course_id: Uuid, resource_id: Uuid) -> Result<bool, DomainError>;
}
