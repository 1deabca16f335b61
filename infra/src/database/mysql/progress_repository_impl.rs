//! MySQL implementation of the ProgressRepository trait.
//!
//! The upsert is a single `INSERT ... ON DUPLICATE KEY UPDATE` keyed by the
//! unique `(user_id, lesson_id)` index; the stored row is re-read afterwards
//! so the caller gets the surviving id and creation time.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use es_core::domain::entities::progress::Progress;
use es_core::errors::{DomainError, DomainResult};
use es_core::repositories::ProgressRepository;

use super::store::{column, query_error, uuid_column, MySqlStore};

const COLUMNS: &str = "id, user_id, course_id, lesson_id, completed, watch_time, last_watched, \
                       created_at, updated_at";

pub struct MySqlProgressRepository {
    store: MySqlStore,
}

impl MySqlProgressRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            store: MySqlStore::new(pool, "progress", "Progress"),
        }
    }

    fn row_to_progress(row: &MySqlRow) -> DomainResult<Progress> {
        Ok(Progress {
            id: uuid_column(row, "id")?,
            user_id: uuid_column(row, "user_id")?,
            course_id: uuid_column(row, "course_id")?,
            lesson_id: uuid_column(row, "lesson_id")?,
            completed: column(row, "completed")?,
            watch_time: column(row, "watch_time")?,
            last_watched: column(row, "last_watched")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl ProgressRepository for MySqlProgressRepository {
    async fn upsert(
        &self,
        user_id: Uuid,
        lesson_id: Uuid,
        course_id: Uuid,
        watch_time: u32,
        completed: bool,
    ) -> Result<Progress, DomainError> {
        let now = Utc::now();
        let query = r#"
            INSERT INTO progress (
                id, user_id, course_id, lesson_id, completed, watch_time,
                last_watched, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                course_id = VALUES(course_id),
                completed = VALUES(completed),
                watch_time = VALUES(watch_time),
                last_watched = VALUES(last_watched),
                updated_at = VALUES(updated_at)
        "#;

        sqlx::query(query)
            .bind(Uuid::new_v4().to_string())
            .bind(user_id.to_string())
            .bind(course_id.to_string())
            .bind(lesson_id.to_string())
            .bind(completed)
            .bind(watch_time)
            .bind(now)
            .bind(now)
            .bind(now)
            .execute(self.store.pool())
            .await
            .map_err(|e| query_error("Progress", "save", e))?;

        self.find_by_user_and_lesson(user_id, lesson_id)
            .await?
            .ok_or_else(|| DomainError::database("Progress row missing after upsert"))
    }

    async fn find_by_user_and_lesson(
        &self,
        user_id: Uuid,
        lesson_id: Uuid,
    ) -> Result<Option<Progress>, DomainError> {
        let query = format!(
            "SELECT {} FROM progress WHERE user_id = ? AND lesson_id = ? LIMIT 1",
            COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(user_id.to_string())
            .bind(lesson_id.to_string())
            .fetch_optional(self.store.pool())
            .await
            .map_err(|e| query_error("Progress", "find", e))?;

        row.as_ref().map(Self::row_to_progress).transpose()
    }

    async fn find_by_user_and_course(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Vec<Progress>, DomainError> {
        let query = format!(
            "SELECT {} FROM progress WHERE user_id = ? AND course_id = ? ORDER BY last_watched DESC",
            COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(user_id.to_string())
            .bind(course_id.to_string())
            .fetch_all(self.store.pool())
            .await
            .map_err(|e| query_error("Progress", "list", e))?;

        rows.iter().map(Self::row_to_progress).collect()
    }

    async fn delete_by_course(&self, course_id: Uuid) -> Result<u64, DomainError> {
        self.store.delete_by_course(course_id).await
    }
}
