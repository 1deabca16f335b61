//! Main course catalog service implementation

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::lesson::NewLesson;
use crate::domain::entities::{Course, Lesson, Resource, Section, User};
use crate::domain::value_objects::{
    CourseDetails, CourseListing, CourseProgress, InstructorSummary, SectionDetails,
};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{
    CourseRepository, EnrollmentRepository, LessonRepository, ProgressRepository, Repositories,
    ResourceRepository, SectionRepository, UserRepository,
};
use crate::services::media::{MediaKind, MediaService};

use super::input::{
    CreateCourseInput, NewLessonInput, NewResourceInput, NewSectionInput, UpdateCourseInput,
};

const THUMBNAIL_FOLDER: &str = "thumbnails";

/// Course catalog: authoring operations guarded by ownership, plus reads
pub struct CourseService {
    users: Arc<dyn UserRepository>,
    courses: Arc<dyn CourseRepository>,
    sections: Arc<dyn SectionRepository>,
    lessons: Arc<dyn LessonRepository>,
    resources: Arc<dyn ResourceRepository>,
    enrollments: Arc<dyn EnrollmentRepository>,
    progress: Arc<dyn ProgressRepository>,
    media: Arc<MediaService>,
}

impl CourseService {
    pub fn new(repositories: &Repositories, media: Arc<MediaService>) -> Self {
        Self {
            users: repositories.users.clone(),
            courses: repositories.courses.clone(),
            sections: repositories.sections.clone(),
            lessons: repositories.lessons.clone(),
            resources: repositories.resources.clone(),
            enrollments: repositories.enrollments.clone(),
            progress: repositories.progress.clone(),
            media,
        }
    }

    /// Create a draft course, uploading the thumbnail when one is given
    pub async fn create_course(
        &self,
        instructor_id: Uuid,
        input: CreateCourseInput,
        thumbnail: Option<Vec<u8>>,
    ) -> DomainResult<Course> {
        let mut course = Course::new(instructor_id, input.title, input.description);

        if let Some(bytes) = thumbnail {
            let name = format!("course-{}", Utc::now().timestamp_millis());
            let uploaded = self.media.upload_image(bytes, &name, THUMBNAIL_FOLDER).await?;
            course.set_thumbnail(uploaded.url, uploaded.content_id);
        }

        let course = self.courses.create(course).await?;
        tracing::info!(course_id = %course.id, instructor_id = %instructor_id, "Course created");
        Ok(course)
    }

    /// Update title/description and optionally replace the thumbnail
    pub async fn update_course(
        &self,
        course_id: Uuid,
        instructor_id: Uuid,
        input: UpdateCourseInput,
        thumbnail: Option<Vec<u8>>,
    ) -> DomainResult<Course> {
        let mut course = self.owned_course(course_id, instructor_id, "update").await?;

        if let Some(bytes) = thumbnail {
            if let Some(old_id) = course.thumbnail_id.clone() {
                self.delete_best_effort(&old_id, MediaKind::Image).await;
            }

            let name = format!("course-{}-{}", course_id, Utc::now().timestamp_millis());
            let uploaded = self.media.upload_image(bytes, &name, THUMBNAIL_FOLDER).await?;
            course.set_thumbnail(uploaded.url, uploaded.content_id);
        }

        course.apply_update(input.title, input.description);
        self.courses.update(course).await
    }

    /// Delete a course with all of its media and dependent records
    ///
    /// Media deletions are best-effort: a failing asset is logged and the
    /// remaining assets and records are still removed.
    pub async fn delete_course(&self, course_id: Uuid, instructor_id: Uuid) -> DomainResult<()> {
        let course = self.owned_course(course_id, instructor_id, "delete").await?;

        for lesson in self.lessons.find_by_course(course_id).await? {
            self.delete_best_effort(&lesson.video_id, MediaKind::Video).await;
        }
        for resource in self.resources.find_by_course(course_id).await? {
            self.delete_best_effort(&resource.file_id, MediaKind::Raw).await;
        }
        if let Some(thumbnail_id) = course.thumbnail_id.as_deref() {
            self.delete_best_effort(thumbnail_id, MediaKind::Image).await;
        }

        let progress = self.progress.delete_by_course(course_id).await?;
        let enrollments = self.enrollments.delete_by_course(course_id).await?;
        let lessons = self.lessons.delete_by_course(course_id).await?;
        let sections = self.sections.delete_by_course(course_id).await?;
        let resources = self.resources.delete_by_course(course_id).await?;
        self.courses.delete(course_id).await?;

        tracing::info!(
            course_id = %course_id,
            sections,
            lessons,
            resources,
            enrollments,
            progress,
            "Course deleted"
        );
        Ok(())
    }

    /// Full course hierarchy, with enrollment state when a viewer is known
    pub async fn get_course(&self, course_id: Uuid, viewer_id: Option<Uuid>) -> DomainResult<CourseDetails> {
        let course = self.find_course(course_id).await?;

        let instructor = self
            .users
            .find_by_id(course.instructor_id)
            .await?
            .map(|user| InstructorSummary::from_user(&user));

        let mut lessons_by_section: HashMap<Uuid, Vec<Lesson>> = HashMap::new();
        for lesson in self.lessons.find_by_course(course_id).await? {
            lessons_by_section.entry(lesson.section_id).or_default().push(lesson);
        }

        let sections = self
            .sections
            .find_by_course(course_id)
            .await?
            .into_iter()
            .map(|section| {
                let lessons = lessons_by_section.remove(&section.id).unwrap_or_default();
                SectionDetails::new(section, lessons)
            })
            .collect();

        let resources = self.resources.find_by_course(course_id).await?;
        let details = CourseDetails::new(course, instructor, sections, resources);

        match viewer_id {
            Some(viewer_id) => {
                let is_enrolled = self.enrollments.is_enrolled(viewer_id, course_id).await?;
                let progress = if is_enrolled {
                    let records = self.progress.find_by_user_and_course(viewer_id, course_id).await?;
                    Some(CourseProgress::from_records(&records))
                } else {
                    None
                };
                Ok(details.with_viewer(is_enrolled, progress))
            }
            None => Ok(details),
        }
    }

    /// Published courses newest first, optionally filtered by search terms
    pub async fn get_published_courses(&self, search: Option<&str>) -> DomainResult<Vec<CourseListing>> {
        let courses = match search.map(str::trim).filter(|q| !q.is_empty()) {
            Some(query) => self.courses.search_published(query).await?,
            None => self.courses.find_published().await?,
        };
        self.with_instructors(courses).await
    }

    /// Every course of an instructor regardless of publish state
    pub async fn get_instructor_courses(&self, instructor_id: Uuid) -> DomainResult<Vec<Course>> {
        self.courses.find_by_instructor(instructor_id).await
    }

    /// Move a course from draft to published
    pub async fn publish_course(&self, course_id: Uuid, instructor_id: Uuid) -> DomainResult<Course> {
        let mut course = self.owned_course(course_id, instructor_id, "publish").await?;
        course.publish();
        let course = self.courses.update(course).await?;
        tracing::info!(course_id = %course_id, "Course published");
        Ok(course)
    }

    pub async fn add_section(
        &self,
        course_id: Uuid,
        instructor_id: Uuid,
        input: NewSectionInput,
    ) -> DomainResult<Section> {
        self.owned_course(course_id, instructor_id, "modify").await?;

        let section = self
            .sections
            .create(Section::new(course_id, input.title, input.order))
            .await?;

        if !self.courses.append_section(course_id, section.id).await? {
            return Err(DomainError::not_found("Course"));
        }
        Ok(section)
    }

    /// Upload the lesson video and attach the lesson to its section
    pub async fn add_lesson(
        &self,
        course_id: Uuid,
        instructor_id: Uuid,
        input: NewLessonInput,
        video: Vec<u8>,
    ) -> DomainResult<Lesson> {
        self.owned_course(course_id, instructor_id, "modify").await?;

        let section = self
            .sections
            .find_by_id(input.section_id)
            .await?
            .filter(|s| s.belongs_to(course_id))
            .ok_or_else(|| DomainError::not_found("Section"))?;

        let name = format!("lesson-{}", Utc::now().timestamp_millis());
        let folder = format!("courses/{}/videos", course_id);
        let uploaded = self.media.upload_video(video, &name, &folder).await?;

        let lesson = self
            .lessons
            .create(Lesson::new(NewLesson {
                section_id: section.id,
                course_id,
                title: input.title,
                description: input.description,
                // host-detected duration wins over the caller's value
                duration: uploaded.duration.filter(|d| *d > 0).unwrap_or(input.duration),
                order: input.order,
                video_url: uploaded.url,
                video_id: uploaded.content_id,
            }))
            .await?;

        if !self.sections.append_lesson(section.id, lesson.id).await? {
            return Err(DomainError::not_found("Section"));
        }
        Ok(lesson)
    }

    /// Upload a downloadable file and attach it to the course
    pub async fn add_resource(
        &self,
        course_id: Uuid,
        instructor_id: Uuid,
        input: NewResourceInput,
        file: Vec<u8>,
    ) -> DomainResult<Resource> {
        self.owned_course(course_id, instructor_id, "modify").await?;

        let size = file.len() as u64;
        let name = format!("resource-{}", Utc::now().timestamp_millis());
        let folder = format!("courses/{}/resources", course_id);
        let uploaded = self.media.upload_file(file, &name, &folder).await?;

        let resource = self
            .resources
            .create(Resource::new(
                course_id,
                input.title,
                input.file_type,
                size,
                uploaded.url,
                uploaded.content_id,
            ))
            .await?;

        if !self.courses.append_resource(course_id, resource.id).await? {
            return Err(DomainError::not_found("Course"));
        }
        Ok(resource)
    }

    async fn find_course(&self, course_id: Uuid) -> DomainResult<Course> {
        self.courses
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Course"))
    }

    /// Loads the course and checks that `instructor_id` owns it
    async fn owned_course(&self, course_id: Uuid, instructor_id: Uuid, action: &str) -> DomainResult<Course> {
        let course = self.find_course(course_id).await?;
        if !course.is_owned_by(instructor_id) {
            tracing::warn!(course_id = %course_id, user_id = %instructor_id, action, "Ownership check failed");
            return Err(DomainError::forbidden(format!(
                "You are not authorized to {} this course",
                action
            )));
        }
        Ok(course)
    }

    async fn delete_best_effort(&self, content_id: &str, kind: MediaKind) {
        if let Err(e) = self.media.delete_media(content_id, kind).await {
            tracing::warn!(content_id, kind = %kind, error = %e, "Media cleanup failed, continuing");
        }
    }

    async fn with_instructors(&self, courses: Vec<Course>) -> DomainResult<Vec<CourseListing>> {
        let ids: Vec<Uuid> = courses
            .iter()
            .map(|c| c.instructor_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let instructors: HashMap<Uuid, User> = self
            .users
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(courses
            .into_iter()
            .map(|course| CourseListing {
                instructor: instructors.get(&course.instructor_id).map(InstructorSummary::listing),
                course,
            })
            .collect())
    }
}
