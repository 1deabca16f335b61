//! Progress repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::progress::Progress;
use crate::errors::DomainError;

/// Persistence for per (user, lesson) watch state
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Create or overwrite the row keyed by (user, lesson)
    ///
    /// Always stamps `last_watched` with the current time and stores
    /// `course_id` alongside for aggregation.
    async fn upsert(
        &self,
        user_id: Uuid,
        lesson_id: Uuid,
        course_id: Uuid,
        watch_time: u32,
        completed: bool,
    ) -> Result<Progress, DomainError>;

    async fn find_by_user_and_lesson(
        &self,
        user_id: Uuid,
        lesson_id: Uuid,
    ) -> Result<Option<Progress>, DomainError>;

    async fn find_by_user_and_course(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Vec<Progress>, DomainError>;

    async fn delete_by_course(&self, course_id: Uuid) -> Result<u64, DomainError>;
}
