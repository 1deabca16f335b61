//! MySQL implementation of the ResourceRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use es_core::domain::entities::resource::Resource;
use es_core::errors::{DomainError, DomainResult};
use es_core::repositories::ResourceRepository;

use super::store::{column, uuid_column, write_error, MySqlStore};

const COLUMNS: &str = "id, course_id, title, file_url, file_id, file_type, size, created_at, updated_at";

pub struct MySqlResourceRepository {
    store: MySqlStore,
}

impl MySqlResourceRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            store: MySqlStore::new(pool, "resources", "Resource"),
        }
    }

    fn row_to_resource(row: &MySqlRow) -> DomainResult<Resource> {
        Ok(Resource {
            id: uuid_column(row, "id")?,
            course_id: uuid_column(row, "course_id")?,
            title: column(row, "title")?,
            file_url: column(row, "file_url")?,
            file_id: column(row, "file_id")?,
            file_type: column(row, "file_type")?,
            size: column(row, "size")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl ResourceRepository for MySqlResourceRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Resource>, DomainError> {
        self.store.fetch_by_id(COLUMNS, id, Self::row_to_resource).await
    }

    async fn find_by_course(&self, course_id: Uuid) -> Result<Vec<Resource>, DomainError> {
        self.store
            .fetch_where(COLUMNS, "course_id", course_id, "created_at ASC", Self::row_to_resource)
            .await
    }

    async fn create(&self, resource: Resource) -> Result<Resource, DomainError> {
        let query = r#"
            INSERT INTO resources (
                id, course_id, title, file_url, file_id, file_type, size, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(resource.id.to_string())
            .bind(resource.course_id.to_string())
            .bind(&resource.title)
            .bind(&resource.file_url)
            .bind(&resource.file_id)
            .bind(&resource.file_type)
            .bind(resource.size)
            .bind(resource.created_at)
            .bind(resource.updated_at)
            .execute(self.store.pool())
            .await
            .map_err(|e| write_error("Resource", "Resource already exists", e))?;

        Ok(resource)
    }

    async fn delete_by_course(&self, course_id: Uuid) -> Result<u64, DomainError> {
        self.store.delete_by_course(course_id).await
    }
}
