//! In-memory implementation of ProgressRepository

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::entities::progress::Progress;
use crate::errors::DomainError;
use crate::repositories::store::MemoryStore;

use super::trait_::ProgressRepository;

#[derive(Clone)]
pub struct MockProgressRepository {
    records: MemoryStore<Progress>,
    // serializes the find-then-write of an upsert
    upsert_lock: Arc<Mutex<()>>,
}

impl MockProgressRepository {
    pub fn new() -> Self {
        Self {
            records: MemoryStore::new("Progress"),
            upsert_lock: Arc::new(Mutex::new(())),
        }
    }
}

impl Default for MockProgressRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProgressRepository for MockProgressRepository {
    async fn upsert(
        &self,
        user_id: Uuid,
        lesson_id: Uuid,
        course_id: Uuid,
        watch_time: u32,
        completed: bool,
    ) -> Result<Progress, DomainError> {
        let _guard = self.upsert_lock.lock().await;

        let existing = self
            .records
            .find(|p| p.user_id == user_id && p.lesson_id == lesson_id)
            .await;

        match existing {
            Some(record) => self
                .records
                .modify(record.id, |p| {
                    p.course_id = course_id;
                    p.record(watch_time, completed);
                })
                .await
                .ok_or_else(|| DomainError::not_found("Progress")),
            None => {
                let record = Progress::new(user_id, lesson_id, course_id, watch_time, completed);
                Ok(self.records.insert(record).await)
            }
        }
    }

    async fn find_by_user_and_lesson(
        &self,
        user_id: Uuid,
        lesson_id: Uuid,
    ) -> Result<Option<Progress>, DomainError> {
        Ok(self
            .records
            .find(|p| p.user_id == user_id && p.lesson_id == lesson_id)
            .await)
    }

    async fn find_by_user_and_course(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Vec<Progress>, DomainError> {
        Ok(self
            .records
            .filter(|p| p.user_id == user_id && p.course_id == course_id)
            .await)
    }

    async fn delete_by_course(&self, course_id: Uuid) -> Result<u64, DomainError> {
        Ok(self.records.remove_where(|p| p.course_id == course_id).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upsert_overwrites_single_row() {
        let repo = MockProgressRepository::new();
        let (user, lesson, course) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

        let first = repo.upsert(user, lesson, course, 30, false).await.unwrap();
        let second = repo.upsert(user, lesson, course, 90, true).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.watch_time, 90);
        assert!(second.completed);
        assert!(second.last_watched >= first.last_watched);

        let rows = repo.find_by_user_and_course(user, course).await.unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_lesson_progress_is_none() {
        let repo = MockProgressRepository::new();
        let found = repo
            .find_by_user_and_lesson(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap();
        assert!(found.is_none());
    }
}
