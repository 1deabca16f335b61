//! In-memory implementation of EnrollmentRepository

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::enrollment::Enrollment;
use crate::errors::DomainError;
use crate::repositories::store::MemoryStore;

use super::trait_::EnrollmentRepository;

pub(crate) const ALREADY_ENROLLED: &str = "Already enrolled in this course";

#[derive(Clone)]
pub struct MockEnrollmentRepository {
    enrollments: MemoryStore<Enrollment>,
}

impl MockEnrollmentRepository {
    pub fn new() -> Self {
        Self {
            enrollments: MemoryStore::new("Enrollment"),
        }
    }
}

impl Default for MockEnrollmentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EnrollmentRepository for MockEnrollmentRepository {
    async fn find(&self, user_id: Uuid, course_id: Uuid) -> Result<Option<Enrollment>, DomainError> {
        Ok(self.enrollments.find(|e| e.matches(user_id, course_id)).await)
    }

    async fn is_enrolled(&self, user_id: Uuid, course_id: Uuid) -> Result<bool, DomainError> {
        Ok(self.enrollments.exists(|e| e.matches(user_id, course_id)).await)
    }

    async fn create(&self, enrollment: Enrollment) -> Result<Enrollment, DomainError> {
        let (user_id, course_id) = (enrollment.user_id, enrollment.course_id);
        self.enrollments
            .insert_unique(enrollment, |e| e.matches(user_id, course_id), ALREADY_ENROLLED)
            .await
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Enrollment>, DomainError> {
        let mut enrollments = self.enrollments.filter(|e| e.user_id == user_id).await;
        enrollments.sort_by(|a, b| b.enrolled_at.cmp(&a.enrolled_at));
        Ok(enrollments)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.enrollments.remove(id).await)
    }

    async fn delete_by_course(&self, course_id: Uuid) -> Result<u64, DomainError> {
        Ok(self.enrollments.remove_where(|e| e.course_id == course_id).await)
    }
}
