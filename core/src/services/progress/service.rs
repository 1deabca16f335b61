//! Watch progress tracking

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{Lesson, Progress};
use crate::domain::value_objects::CourseProgress;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{EnrollmentRepository, LessonRepository, ProgressRepository, Repositories};

/// A player heartbeat for one lesson
#[derive(Debug, Clone)]
pub struct UpdateProgressInput {
    pub lesson_id: Uuid,
    /// Seconds watched so far
    pub watch_time: u32,
    pub completed: bool,
}

pub struct ProgressService {
    lessons: Arc<dyn LessonRepository>,
    enrollments: Arc<dyn EnrollmentRepository>,
    progress: Arc<dyn ProgressRepository>,
}

impl ProgressService {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            lessons: repositories.lessons.clone(),
            enrollments: repositories.enrollments.clone(),
            progress: repositories.progress.clone(),
        }
    }

    /// Record watch state for a lesson of a course the user is enrolled in
    ///
    /// Values overwrite the stored row as given; a later heartbeat with a
    /// smaller watch time or `completed = false` is not rejected.
    pub async fn update_progress(&self, user_id: Uuid, input: UpdateProgressInput) -> DomainResult<Progress> {
        let lesson = self.find_lesson(input.lesson_id).await?;

        if !self.enrollments.is_enrolled(user_id, lesson.course_id).await? {
            return Err(DomainError::forbidden(
                "You must be enrolled in the course to track progress",
            ));
        }

        let progress = self
            .progress
            .upsert(user_id, lesson.id, lesson.course_id, input.watch_time, input.completed)
            .await?;

        tracing::debug!(
            user_id = %user_id,
            lesson_id = %lesson.id,
            watch_time = input.watch_time,
            completed = input.completed,
            "Progress recorded"
        );
        Ok(progress)
    }

    /// Completed lessons against recorded lessons for one course
    pub async fn get_course_progress(&self, user_id: Uuid, course_id: Uuid) -> DomainResult<CourseProgress> {
        if !self.enrollments.is_enrolled(user_id, course_id).await? {
            return Err(DomainError::forbidden(
                "You must be enrolled in the course to view progress",
            ));
        }

        let records = self.progress.find_by_user_and_course(user_id, course_id).await?;
        Ok(CourseProgress::from_records(&records))
    }

    /// `None` when the enrolled user never watched the lesson
    pub async fn get_lesson_progress(&self, user_id: Uuid, lesson_id: Uuid) -> DomainResult<Option<Progress>> {
        let lesson = self.find_lesson(lesson_id).await?;

        if !self.enrollments.is_enrolled(user_id, lesson.course_id).await? {
            return Err(DomainError::forbidden(
                "You must be enrolled in the course to view progress",
            ));
        }

        self.progress.find_by_user_and_lesson(user_id, lesson.id).await
    }

    async fn find_lesson(&self, lesson_id: Uuid) -> DomainResult<Lesson> {
        self.lessons
            .find_by_id(lesson_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Lesson"))
    }
}
