//! Section repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::section::Section;
use crate::errors::DomainError;

#[async_trait]
pub trait SectionRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Section>, DomainError>;

    /// Sections of a course sorted by `order`
    async fn find_by_course(&self, course_id: Uuid) -> Result<Vec<Section>, DomainError>;

    async fn create(&self, section: Section) -> Result<Section, DomainError>;

    /// Atomically append `lesson_id` to the section's lesson list if absent
    async fn append_lesson(&self, section_id: Uuid, lesson_id: Uuid) -> Result<bool, DomainError>;

    async fn delete_by_course(&self, course_id: Uuid) -> Result<u64, DomainError>;
}
