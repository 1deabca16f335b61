//! In-memory implementation of LessonRepository

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::lesson::Lesson;
use crate::errors::DomainError;
use crate::repositories::store::MemoryStore;

use super::trait_::LessonRepository;

#[derive(Clone)]
pub struct MockLessonRepository {
    lessons: MemoryStore<Lesson>,
}

impl MockLessonRepository {
    pub fn new() -> Self {
        Self {
            lessons: MemoryStore::new("Lesson"),
        }
    }
}

impl Default for MockLessonRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LessonRepository for MockLessonRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Lesson>, DomainError> {
        Ok(self.lessons.get(id).await)
    }

    async fn find_by_course(&self, course_id: Uuid) -> Result<Vec<Lesson>, DomainError> {
        let mut lessons = self.lessons.filter(|l| l.course_id == course_id).await;
        lessons.sort_by_key(|l| l.order);
        Ok(lessons)
    }

    async fn create(&self, lesson: Lesson) -> Result<Lesson, DomainError> {
        Ok(self.lessons.insert(lesson).await)
    }

    async fn delete_by_course(&self, course_id: Uuid) -> Result<u64, DomainError> {
        Ok(self.lessons.remove_where(|l| l.course_id == course_id).await)
    }
}
