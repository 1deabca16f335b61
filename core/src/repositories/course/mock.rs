//! In-memory implementation of CourseRepository

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::course::Course;
use crate::errors::DomainError;
use crate::repositories::store::MemoryStore;

use super::trait_::CourseRepository;

#[derive(Clone)]
pub struct MockCourseRepository {
    courses: MemoryStore<Course>,
}

impl MockCourseRepository {
    pub fn new() -> Self {
        Self {
            courses: MemoryStore::new("Course"),
        }
    }
}

impl Default for MockCourseRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn newest_first(mut courses: Vec<Course>) -> Vec<Course> {
    courses.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    courses
}

fn push_unique(ids: &mut Vec<Uuid>, id: Uuid) {
    if !ids.contains(&id) {
        ids.push(id);
    }
}

#[async_trait]
impl CourseRepository for MockCourseRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, DomainError> {
        Ok(self.courses.get(id).await)
    }

    async fn create(&self, course: Course) -> Result<Course, DomainError> {
        Ok(self.courses.insert(course).await)
    }

    async fn update(&self, course: Course) -> Result<Course, DomainError> {
        self.courses
            .modify(course.id, |stored| {
                stored.title = course.title.clone();
                stored.description = course.description.clone();
                stored.thumbnail = course.thumbnail.clone();
                stored.thumbnail_id = course.thumbnail_id.clone();
                stored.published = course.published;
                stored.updated_at = course.updated_at;
            })
            .await
            .ok_or_else(|| DomainError::not_found("Course"))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.courses.remove(id).await)
    }

    async fn find_by_instructor(&self, instructor_id: Uuid) -> Result<Vec<Course>, DomainError> {
        let courses = self.courses.filter(|c| c.instructor_id == instructor_id).await;
        Ok(newest_first(courses))
    }

    async fn find_published(&self) -> Result<Vec<Course>, DomainError> {
        Ok(newest_first(self.courses.filter(|c| c.published).await))
    }

    async fn search_published(&self, query: &str) -> Result<Vec<Course>, DomainError> {
        let courses = self
            .courses
            .filter(|c| c.published && c.matches_search(query))
            .await;
        Ok(newest_first(courses))
    }

    async fn append_section(&self, course_id: Uuid, section_id: Uuid) -> Result<bool, DomainError> {
        Ok(self
            .courses
            .modify(course_id, |c| push_unique(&mut c.section_ids, section_id))
            .await
            .is_some())
    }

    async fn append_resource(&self, course_id: Uuid, resource_id: Uuid) -> Result<bool, DomainError> {
        Ok(self
            .courses
            .modify(course_id, |c| push_unique(&mut c.resource_ids, resource_id))
            .await
            .is_some())
    }
}
