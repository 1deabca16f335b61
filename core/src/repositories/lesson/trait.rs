//! Lesson repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::lesson::Lesson;
use crate::errors::DomainError;

#[async_trait]
pub trait LessonRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Lesson>, DomainError>;

    /// Every lesson of a course sorted by `order`
    async fn find_by_course(&self, course_id: Uuid) -> Result<Vec<Lesson>, DomainError>;

    async fn create(&self, lesson: Lesson) -> Result<Lesson, DomainError>;

    async fn delete_by_course(&self, course_id: Uuid) -> Result<u64, DomainError>;
}
