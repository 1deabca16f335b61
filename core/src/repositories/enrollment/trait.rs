//! Enrollment repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::enrollment::Enrollment;
use crate::errors::DomainError;

/// Persistence for the unique (user, course) enrollment relation
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    async fn find(&self, user_id: Uuid, course_id: Uuid) -> Result<Option<Enrollment>, DomainError>;

    async fn is_enrolled(&self, user_id: Uuid, course_id: Uuid) -> Result<bool, DomainError>;

    /// Insert a new enrollment
    ///
    /// The (user, course) uniqueness is enforced here; a duplicate fails
    /// with `Conflict` even when two requests race.
    async fn create(&self, enrollment: Enrollment) -> Result<Enrollment, DomainError>;

    /// A user's enrollments, newest first
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Enrollment>, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    async fn delete_by_course(&self, course_id: Uuid) -> Result<u64, DomainError>;
}
