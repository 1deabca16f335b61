//! Student enrollment in published courses

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{Course, Enrollment};
use crate::domain::value_objects::{CourseListing, EnrolledCourse, InstructorSummary};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{CourseRepository, EnrollmentRepository, Repositories, UserRepository};

pub struct EnrollmentService {
    users: Arc<dyn UserRepository>,
    courses: Arc<dyn CourseRepository>,
    enrollments: Arc<dyn EnrollmentRepository>,
}

impl EnrollmentService {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            users: repositories.users.clone(),
            courses: repositories.courses.clone(),
            enrollments: repositories.enrollments.clone(),
        }
    }

    /// Enroll a user in a published course
    ///
    /// A second enrollment for the same pair fails with `Conflict`; the
    /// repository enforces this atomically.
    pub async fn enroll_in_course(&self, user_id: Uuid, course_id: Uuid) -> DomainResult<Enrollment> {
        let course = self
            .courses
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Course"))?;

        if !course.published {
            return Err(DomainError::business_rule("Cannot enroll in unpublished course"));
        }

        let enrollment = self.enrollments.create(Enrollment::new(user_id, course_id)).await?;
        tracing::info!(user_id = %user_id, course_id = %course_id, "User enrolled");
        Ok(enrollment)
    }

    /// A user's enrollments newest first, each with its course summary
    pub async fn get_enrolled_courses(&self, user_id: Uuid) -> DomainResult<Vec<EnrolledCourse>> {
        let enrollments = self.enrollments.find_by_user(user_id).await?;

        let mut courses: HashMap<Uuid, Course> = HashMap::new();
        for enrollment in &enrollments {
            if let Some(course) = self.courses.find_by_id(enrollment.course_id).await? {
                courses.insert(course.id, course);
            }
        }

        let instructor_ids: Vec<Uuid> = courses.values().map(|c| c.instructor_id).collect();
        let instructors: HashMap<Uuid, InstructorSummary> = self
            .users
            .find_by_ids(&instructor_ids)
            .await?
            .iter()
            .map(|u| (u.id, InstructorSummary::listing(u)))
            .collect();

        Ok(enrollments
            .into_iter()
            .map(|enrollment| {
                let listing = courses.get(&enrollment.course_id).map(|course| CourseListing {
                    instructor: instructors.get(&course.instructor_id).cloned(),
                    course: course.clone(),
                });
                EnrolledCourse::new(enrollment, listing)
            })
            .collect())
    }

    pub async fn unenroll(&self, user_id: Uuid, course_id: Uuid) -> DomainResult<()> {
        let enrollment = self
            .enrollments
            .find(user_id, course_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Enrollment"))?;

        self.enrollments.delete(enrollment.id).await?;
        tracing::info!(user_id = %user_id, course_id = %course_id, "User unenrolled");
        Ok(())
    }
}
