//! In-memory implementation of ResourceRepository

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::resource::Resource;
use crate::errors::DomainError;
use crate::repositories::store::MemoryStore;

use super::trait_::ResourceRepository;

#[derive(Clone)]
pub struct MockResourceRepository {
    resources: MemoryStore<Resource>,
}

impl MockResourceRepository {
    pub fn new() -> Self {
        Self {
            resources: MemoryStore::new("Resource"),
        }
    }
}

impl Default for MockResourceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResourceRepository for MockResourceRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Resource>, DomainError> {
        Ok(self.resources.get(id).await)
    }

    async fn find_by_course(&self, course_id: Uuid) -> Result<Vec<Resource>, DomainError> {
        let mut resources = self.resources.filter(|r| r.course_id == course_id).await;
        resources.sort_by_key(|r| r.created_at);
        Ok(resources)
    }

    async fn create(&self, resource: Resource) -> Result<Resource, DomainError> {
        Ok(self.resources.insert(resource).await)
    }

    async fn delete_by_course(&self, course_id: Uuid) -> Result<u64, DomainError> {
        Ok(self.resources.remove_where(|r| r.course_id == course_id).await)
    }
}
