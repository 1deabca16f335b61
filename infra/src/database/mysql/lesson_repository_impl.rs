//! MySQL implementation of the LessonRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use es_core::domain::entities::lesson::Lesson;
use es_core::errors::{DomainError, DomainResult};
use es_core::repositories::LessonRepository;

use super::store::{column, uuid_column, write_error, MySqlStore};

const COLUMNS: &str = "id, section_id, course_id, title, description, video_url, video_id, \
                       duration, sort_order, created_at, updated_at";

pub struct MySqlLessonRepository {
    store: MySqlStore,
}

impl MySqlLessonRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            store: MySqlStore::new(pool, "lessons", "Lesson"),
        }
    }

    fn row_to_lesson(row: &MySqlRow) -> DomainResult<Lesson> {
        Ok(Lesson {
            id: uuid_column(row, "id")?,
            section_id: uuid_column(row, "section_id")?,
            course_id: uuid_column(row, "course_id")?,
            title: column(row, "title")?,
            description: column(row, "description")?,
            video_url: column(row, "video_url")?,
            video_id: column(row, "video_id")?,
            duration: column(row, "duration")?,
            order: column(row, "sort_order")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl LessonRepository for MySqlLessonRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Lesson>, DomainError> {
        self.store.fetch_by_id(COLUMNS, id, Self::row_to_lesson).await
    }

    async fn find_by_course(&self, course_id: Uuid) -> Result<Vec<Lesson>, DomainError> {
        self.store
            .fetch_where(COLUMNS, "course_id", course_id, "sort_order ASC, created_at ASC", Self::row_to_lesson)
            .await
    }

    async fn create(&self, lesson: Lesson) -> Result<Lesson, DomainError> {
        let query = r#"
            INSERT INTO lessons (
                id, section_id, course_id, title, description, video_url, video_id,
                duration, sort_order, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(lesson.id.to_string())
            .bind(lesson.section_id.to_string())
            .bind(lesson.course_id.to_string())
            .bind(&lesson.title)
            .bind(&lesson.description)
            .bind(&lesson.video_url)
            .bind(&lesson.video_id)
            .bind(lesson.duration)
            .bind(lesson.order)
            .bind(lesson.created_at)
            .bind(lesson.updated_at)
            .execute(self.store.pool())
            .await
            .map_err(|e| write_error("Lesson", "Lesson already exists", e))?;

        Ok(lesson)
    }

    async fn delete_by_course(&self, course_id: Uuid) -> Result<u64, DomainError> {
        self.store.delete_by_course(course_id).await
    }
}
