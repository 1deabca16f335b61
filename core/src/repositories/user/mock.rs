//! In-memory implementation of UserRepository

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::repositories::store::MemoryStore;

use super::trait_::UserRepository;

const DUPLICATE_EMAIL: &str = "User with this email already exists";

/// In-memory user repository
#[derive(Clone)]
pub struct MockUserRepository {
    users: MemoryStore<User>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: MemoryStore::new("User"),
        }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.users.get(id).await)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self.users.find(|u| u.email == email).await)
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, DomainError> {
        Ok(self.users.filter(|u| ids.contains(&u.id)).await)
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let email = user.email.clone();
        self.users
            .insert_unique(user, |u| u.email == email, DUPLICATE_EMAIL)
            .await
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.users.exists(|u| u.email == email).await)
    }
}
