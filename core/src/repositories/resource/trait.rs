//! Resource repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::resource::Resource;
use crate::errors::DomainError;

#[async_trait]
pub trait ResourceRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Resource>, DomainError>;

    /// Resources of a course, oldest first
    async fn find_by_course(&self, course_id: Uuid) -> Result<Vec<Resource>, DomainError>;

    async fn create(&self, resource: Resource) -> Result<Resource, DomainError>;

    async fn delete_by_course(&self, course_id: Uuid) -> Result<u64, DomainError>;
}
