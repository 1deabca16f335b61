//! In-memory implementation of SectionRepository

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::section::Section;
use crate::errors::DomainError;
use crate::repositories::store::MemoryStore;

use super::trait_::SectionRepository;

#[derive(Clone)]
pub struct MockSectionRepository {
    sections: MemoryStore<Section>,
}

impl MockSectionRepository {
    pub fn new() -> Self {
        Self {
            sections: MemoryStore::new("Section"),
        }
    }
}

impl Default for MockSectionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SectionRepository for MockSectionRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Section>, DomainError> {
        Ok(self.sections.get(id).await)
    }

    async fn find_by_course(&self, course_id: Uuid) -> Result<Vec<Section>, DomainError> {
        let mut sections = self.sections.filter(|s| s.course_id == course_id).await;
        sections.sort_by_key(|s| s.order);
        Ok(sections)
    }

    async fn create(&self, section: Section) -> Result<Section, DomainError> {
        Ok(self.sections.insert(section).await)
    }

    async fn append_lesson(&self, section_id: Uuid, lesson_id: Uuid) -> Result<bool, DomainError> {
        Ok(self
            .sections
            .modify(section_id, |s| {
                if !s.lesson_ids.contains(&lesson_id) {
                    s.lesson_ids.push(lesson_id);
                }
            })
            .await
            .is_some())
    }

    async fn delete_by_course(&self, course_id: Uuid) -> Result<u64, DomainError> {
        Ok(self.sections.remove_where(|s| s.course_id == course_id).await)
    }
}
