//! MySQL implementation of the SectionRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::types::Json;
use sqlx::MySqlPool;
use uuid::Uuid;

use es_core::domain::entities::section::Section;
use es_core::errors::{DomainError, DomainResult};
use es_core::repositories::SectionRepository;

use super::store::{column, id_list_column, uuid_column, write_error, MySqlStore};

const COLUMNS: &str = "id, course_id, title, sort_order, lesson_ids, created_at, updated_at";

pub struct MySqlSectionRepository {
    store: MySqlStore,
}

impl MySqlSectionRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            store: MySqlStore::new(pool, "sections", "Section"),
        }
    }

    fn row_to_section(row: &MySqlRow) -> DomainResult<Section> {
        Ok(Section {
            id: uuid_column(row, "id")?,
            course_id: uuid_column(row, "course_id")?,
            title: column(row, "title")?,
            order: column(row, "sort_order")?,
            lesson_ids: id_list_column(row, "lesson_ids")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl SectionRepository for MySqlSectionRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Section>, DomainError> {
        self.store.fetch_by_id(COLUMNS, id, Self::row_to_section).await
    }

    async fn find_by_course(&self, course_id: Uuid) -> Result<Vec<Section>, DomainError> {
        self.store
            .fetch_where(COLUMNS, "course_id", course_id, "sort_order ASC, created_at ASC", Self::row_to_section)
            .await
    }

    async fn create(&self, section: Section) -> Result<Section, DomainError> {
        let query = r#"
            INSERT INTO sections (id, course_id, title, sort_order, lesson_ids, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(section.id.to_string())
            .bind(section.course_id.to_string())
            .bind(&section.title)
            .bind(section.order)
            .bind(Json(&section.lesson_ids))
            .bind(section.created_at)
            .bind(section.updated_at)
            .execute(self.store.pool())
            .await
            .map_err(|e| write_error("Section", "Section already exists", e))?;

        Ok(section)
    }

    async fn append_lesson(&self, section_id: Uuid, lesson_id: Uuid) -> Result<bool, DomainError> {
        self.store.append_id("lesson_ids", section_id, lesson_id).await
    }

    async fn delete_by_course(&self, course_id: Uuid) -> Result<u64, DomainError> {
        self.store.delete_by_course(course_id).await
    }
}
