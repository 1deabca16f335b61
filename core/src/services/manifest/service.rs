//! Download manifest assembly for enrolled students

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::value_objects::{DownloadManifest, ManifestCourse, ManifestLesson, ManifestResource};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{
    CourseRepository, EnrollmentRepository, LessonRepository, Repositories, ResourceRepository,
};
use crate::services::media::MediaService;

pub struct ManifestService {
    courses: Arc<dyn CourseRepository>,
    lessons: Arc<dyn LessonRepository>,
    resources: Arc<dyn ResourceRepository>,
    enrollments: Arc<dyn EnrollmentRepository>,
    media: Arc<MediaService>,
}

impl ManifestService {
    pub fn new(repositories: &Repositories, media: Arc<MediaService>) -> Self {
        Self {
            courses: repositories.courses.clone(),
            lessons: repositories.lessons.clone(),
            resources: repositories.resources.clone(),
            enrollments: repositories.enrollments.clone(),
            media,
        }
    }

    /// Everything a client needs to fetch a course for offline viewing
    ///
    /// The enrollment check comes first, so a non-enrolled caller learns
    /// nothing about whether the course exists.
    pub async fn download_manifest(&self, user_id: Uuid, course_id: Uuid) -> DomainResult<DownloadManifest> {
        if !self.enrollments.is_enrolled(user_id, course_id).await? {
            return Err(DomainError::forbidden(
                "You must be enrolled to download course content",
            ));
        }

        let course = self
            .courses
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Course"))?;

        let lessons = self
            .lessons
            .find_by_course(course_id)
            .await?
            .iter()
            .map(|lesson| ManifestLesson::new(lesson, self.media.video_urls(&lesson.video_id)))
            .collect();

        let resources = self
            .resources
            .find_by_course(course_id)
            .await?
            .iter()
            .map(ManifestResource::from)
            .collect();

        Ok(DownloadManifest {
            course: ManifestCourse::from(&course),
            lessons,
            resources,
        })
    }
}
