//! MySQL implementation of the UserRepository trait.
//!
//! Emails arrive already normalized from the service layer; the unique index
//! on `users.email` is the final guard against duplicate registrations.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use es_core::domain::entities::user::{Profile, User, UserRole};
use es_core::errors::{DomainError, DomainResult};
use es_core::repositories::UserRepository;

use super::store::{column, placeholders, query_error, uuid_column, write_error, MySqlStore};

const COLUMNS: &str = "id, email, password_hash, role, name, avatar, bio, created_at, updated_at";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    store: MySqlStore,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            store: MySqlStore::new(pool, "users", "User"),
        }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &MySqlRow) -> DomainResult<User> {
        let role: String = column(row, "role")?;

        Ok(User {
            id: uuid_column(row, "id")?,
            email: column(row, "email")?,
            password_hash: column(row, "password_hash")?,
            role: role.parse::<UserRole>().map_err(DomainError::database)?,
            profile: Profile {
                name: column(row, "name")?,
                avatar: column(row, "avatar")?,
                bio: column(row, "bio")?,
            },
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.store.fetch_by_id(COLUMNS, id, Self::row_to_user).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE email = ? LIMIT 1", COLUMNS);

        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(self.store.pool())
            .await
            .map_err(|e| query_error("User", "find", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!(
            "SELECT {} FROM users WHERE id IN ({})",
            COLUMNS,
            placeholders(ids.len())
        );
        let mut statement = sqlx::query(&query);
        for id in ids {
            statement = statement.bind(id.to_string());
        }

        let rows = statement
            .fetch_all(self.store.pool())
            .await
            .map_err(|e| query_error("User", "list", e))?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, email, password_hash, role, name, avatar, bio, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .bind(&user.profile.name)
            .bind(&user.profile.avatar)
            .bind(&user.profile.bio)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(self.store.pool())
            .await
            .map_err(|e| write_error("User", "User with this email already exists", e))?;

        Ok(user)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?) AS found")
            .bind(email)
            .fetch_one(self.store.pool())
            .await
            .map_err(|e| query_error("User", "check", e))?;

        let found: i64 = column(&row, "found")?;
        Ok(found == 1)
    }
}
