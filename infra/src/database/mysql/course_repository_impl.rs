//! MySQL implementation of the CourseRepository trait.
//!
//! Section and resource ids are kept as JSON arrays on the course row and
//! appended with a single conditional UPDATE. Search uses the FULLTEXT index
//! over title and description in natural language mode, which matches any
//! of the given terms.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::types::Json;
use sqlx::MySqlPool;
use uuid::Uuid;

use es_core::domain::entities::course::Course;
use es_core::errors::{DomainError, DomainResult};
use es_core::repositories::CourseRepository;

use super::store::{column, id_list_column, query_error, uuid_column, write_error, MySqlStore};

const COLUMNS: &str = "id, title, description, thumbnail, thumbnail_id, instructor_id, published, \
                       section_ids, resource_ids, created_at, updated_at";

pub struct MySqlCourseRepository {
    store: MySqlStore,
}

impl MySqlCourseRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            store: MySqlStore::new(pool, "courses", "Course"),
        }
    }

    fn row_to_course(row: &MySqlRow) -> DomainResult<Course> {
        Ok(Course {
            id: uuid_column(row, "id")?,
            title: column(row, "title")?,
            description: column(row, "description")?,
            thumbnail: column(row, "thumbnail")?,
            thumbnail_id: column(row, "thumbnail_id")?,
            instructor_id: uuid_column(row, "instructor_id")?,
            published: column(row, "published")?,
            section_ids: id_list_column(row, "section_ids")?,
            resource_ids: id_list_column(row, "resource_ids")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }

    async fn list(&self, query: &str, bind: Option<&str>) -> DomainResult<Vec<Course>> {
        let mut statement = sqlx::query(query);
        if let Some(value) = bind {
            statement = statement.bind(value);
        }

        let rows = statement
            .fetch_all(self.store.pool())
            .await
            .map_err(|e| query_error("Course", "list", e))?;

        rows.iter().map(Self::row_to_course).collect()
    }
}

#[async_trait]
impl CourseRepository for MySqlCourseRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, DomainError> {
        self.store.fetch_by_id(COLUMNS, id, Self::row_to_course).await
    }

    async fn create(&self, course: Course) -> Result<Course, DomainError> {
        let query = r#"
            INSERT INTO courses (
                id, title, description, thumbnail, thumbnail_id, instructor_id, published,
                section_ids, resource_ids, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(course.id.to_string())
            .bind(&course.title)
            .bind(&course.description)
            .bind(&course.thumbnail)
            .bind(&course.thumbnail_id)
            .bind(course.instructor_id.to_string())
            .bind(course.published)
            .bind(Json(&course.section_ids))
            .bind(Json(&course.resource_ids))
            .bind(course.created_at)
            .bind(course.updated_at)
            .execute(self.store.pool())
            .await
            .map_err(|e| write_error("Course", "Course already exists", e))?;

        Ok(course)
    }

    async fn update(&self, course: Course) -> Result<Course, DomainError> {
        let query = r#"
            UPDATE courses
            SET title = ?, description = ?, thumbnail = ?, thumbnail_id = ?,
                published = ?, updated_at = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&course.title)
            .bind(&course.description)
            .bind(&course.thumbnail)
            .bind(&course.thumbnail_id)
            .bind(course.published)
            .bind(course.updated_at)
            .bind(course.id.to_string())
            .execute(self.store.pool())
            .await
            .map_err(|e| query_error("Course", "update", e))?;

        // Id lists are owned by the append operations; re-read to return them
        self.find_by_id(course.id)
            .await?
            .ok_or_else(|| DomainError::not_found("Course"))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        self.store.delete_by_id(id).await
    }

    async fn find_by_instructor(&self, instructor_id: Uuid) -> Result<Vec<Course>, DomainError> {
        self.store
            .fetch_where(COLUMNS, "instructor_id", instructor_id, "created_at DESC", Self::row_to_course)
            .await
    }

    async fn find_published(&self) -> Result<Vec<Course>, DomainError> {
        let query = format!(
            "SELECT {} FROM courses WHERE published = TRUE ORDER BY created_at DESC",
            COLUMNS
        );
        self.list(&query, None).await
    }

    async fn search_published(&self, query: &str) -> Result<Vec<Course>, DomainError> {
        let sql = format!(
            "SELECT {} FROM courses \
             WHERE published = TRUE AND MATCH(title, description) AGAINST (? IN NATURAL LANGUAGE MODE) \
             ORDER BY created_at DESC",
            COLUMNS
        );
        self.list(&sql, Some(query)).await
    }

    async fn append_section(&self, course_id: Uuid, section_id: Uuid) -> Result<bool, DomainError> {
        self.store.append_id("section_ids", course_id, section_id).await
    }

    async fn append_resource(&self, course_id: Uuid, resource_id: Uuid) -> Result<bool, DomainError> {
        self.store.append_id("resource_ids", course_id, resource_id).await
    }
}
