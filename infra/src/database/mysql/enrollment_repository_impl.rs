//! MySQL implementation of the EnrollmentRepository trait.
//!
//! Duplicate enrollments are rejected by the unique `(user_id, course_id)`
//! index, so two racing requests cannot both succeed.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use es_core::domain::entities::enrollment::Enrollment;
use es_core::errors::{DomainError, DomainResult};
use es_core::repositories::EnrollmentRepository;

use super::store::{column, query_error, uuid_column, write_error, MySqlStore};

const COLUMNS: &str = "id, user_id, course_id, enrolled_at";

pub struct MySqlEnrollmentRepository {
    store: MySqlStore,
}

impl MySqlEnrollmentRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            store: MySqlStore::new(pool, "enrollments", "Enrollment"),
        }
    }

    fn row_to_enrollment(row: &MySqlRow) -> DomainResult<Enrollment> {
        Ok(Enrollment {
            id: uuid_column(row, "id")?,
            user_id: uuid_column(row, "user_id")?,
            course_id: uuid_column(row, "course_id")?,
            enrolled_at: column(row, "enrolled_at")?,
        })
    }
}

#[async_trait]
impl EnrollmentRepository for MySqlEnrollmentRepository {
    async fn find(&self, user_id: Uuid, course_id: Uuid) -> Result<Option<Enrollment>, DomainError> {
        let query = format!(
            "SELECT {} FROM enrollments WHERE user_id = ? AND course_id = ? LIMIT 1",
            COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(user_id.to_string())
            .bind(course_id.to_string())
            .fetch_optional(self.store.pool())
            .await
            .map_err(|e| query_error("Enrollment", "find", e))?;

        row.as_ref().map(Self::row_to_enrollment).transpose()
    }

    async fn is_enrolled(&self, user_id: Uuid, course_id: Uuid) -> Result<bool, DomainError> {
        let row = sqlx::query(
            "SELECT EXISTS(SELECT 1 FROM enrollments WHERE user_id = ? AND course_id = ?) AS found",
        )
        .bind(user_id.to_string())
        .bind(course_id.to_string())
        .fetch_one(self.store.pool())
        .await
        .map_err(|e| query_error("Enrollment", "check", e))?;

        let found: i64 = column(&row, "found")?;
        Ok(found == 1)
    }

    async fn create(&self, enrollment: Enrollment) -> Result<Enrollment, DomainError> {
        sqlx::query("INSERT INTO enrollments (id, user_id, course_id, enrolled_at) VALUES (?, ?, ?, ?)")
            .bind(enrollment.id.to_string())
            .bind(enrollment.user_id.to_string())
            .bind(enrollment.course_id.to_string())
            .bind(enrollment.enrolled_at)
            .execute(self.store.pool())
            .await
            .map_err(|e| write_error("Enrollment", "Already enrolled in this course", e))?;

        Ok(enrollment)
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Enrollment>, DomainError> {
        self.store
            .fetch_where(COLUMNS, "user_id", user_id, "enrolled_at DESC", Self::row_to_enrollment)
            .await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        self.store.delete_by_id(id).await
    }

    async fn delete_by_course(&self, course_id: Uuid) -> Result<u64, DomainError> {
        self.store.delete_by_course(course_id).await
    }
}
