//! Course read models joined with their instructor and children.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Course, Enrollment, Lesson, Resource, Section, User};

use super::course_progress::CourseProgress;

/// Instructor's public profile fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructorSummary {
    pub id: Uuid,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl InstructorSummary {
    /// Name, avatar and bio
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.profile.name.clone(),
            avatar: user.profile.avatar.clone(),
            bio: user.profile.bio.clone(),
        }
    }

    /// Name and avatar only, as shown in listings
    pub fn listing(user: &User) -> Self {
        Self {
            bio: None,
            ..Self::from_user(user)
        }
    }
}

/// A section with its lessons resolved and sorted by `order`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDetails {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub order: u32,
    pub lessons: Vec<Lesson>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SectionDetails {
    pub fn new(section: Section, mut lessons: Vec<Lesson>) -> Self {
        lessons.sort_by_key(|l| l.order);
        Self {
            id: section.id,
            course_id: section.course_id,
            title: section.title,
            order: section.order,
            lessons,
            created_at: section.created_at,
            updated_at: section.updated_at,
        }
    }
}

/// Full course hierarchy as seen by a particular viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetails {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub instructor_id: Uuid,
    /// `None` when the instructor account no longer exists
    pub instructor: Option<InstructorSummary>,
    pub published: bool,
    pub sections: Vec<SectionDetails>,
    pub resources: Vec<Resource>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_enrolled: bool,
    /// Present only for enrolled viewers
    pub progress: Option<CourseProgress>,
}

impl CourseDetails {
    pub fn new(
        course: Course,
        instructor: Option<InstructorSummary>,
        mut sections: Vec<SectionDetails>,
        resources: Vec<Resource>,
    ) -> Self {
        sections.sort_by_key(|s| s.order);
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            thumbnail: course.thumbnail,
            instructor_id: course.instructor_id,
            instructor,
            published: course.published,
            sections,
            resources,
            created_at: course.created_at,
            updated_at: course.updated_at,
            is_enrolled: false,
            progress: None,
        }
    }

    /// Attaches viewer-specific enrollment state
    pub fn with_viewer(mut self, is_enrolled: bool, progress: Option<CourseProgress>) -> Self {
        self.is_enrolled = is_enrolled;
        self.progress = if is_enrolled { progress } else { None };
        self
    }
}

/// Course joined with its instructor, used by listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseListing {
    #[serde(flatten)]
    pub course: Course,

    pub instructor: Option<InstructorSummary>,
}

/// Enrollment joined with its course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrolledCourse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub enrolled_at: DateTime<Utc>,
    /// `None` when the course was deleted after enrolling
    pub course: Option<CourseListing>,
}

impl EnrolledCourse {
    pub fn new(enrollment: Enrollment, course: Option<CourseListing>) -> Self {
        Self {
            id: enrollment.id,
            user_id: enrollment.user_id,
            course_id: enrollment.course_id,
            enrolled_at: enrollment.enrolled_at,
            course,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::lesson::NewLesson;
    use crate::domain::entities::UserRole;

    fn lesson(section: &Section, order: u32) -> Lesson {
        Lesson::new(NewLesson {
            section_id: section.id,
            course_id: section.course_id,
            title: format!("Lesson {}", order),
            description: "A lesson description".to_string(),
            video_url: "https://cdn.example/v.mp4".to_string(),
            video_id: "v".to_string(),
            duration: 60,
            order,
        })
    }

    #[test]
    fn test_sections_and_lessons_sorted_by_order() {
        let course = Course::new(Uuid::new_v4(), "Title".into(), "Description!".into());
        let first = Section::new(course.id, "First".into(), 0);
        let second = Section::new(course.id, "Second".into(), 1);

        let sections = vec![
            SectionDetails::new(second.clone(), vec![]),
            SectionDetails::new(first.clone(), vec![lesson(&first, 2), lesson(&first, 0)]),
        ];
        let details = CourseDetails::new(course, None, sections, vec![]);

        assert_eq!(details.sections[0].title, "First");
        assert_eq!(details.sections[0].lessons[0].order, 0);
        assert_eq!(details.sections[0].lessons[1].order, 2);
    }

    #[test]
    fn test_progress_dropped_for_non_enrolled_viewer() {
        let course = Course::new(Uuid::new_v4(), "Title".into(), "Description!".into());
        let details = CourseDetails::new(course, None, vec![], vec![])
            .with_viewer(false, Some(CourseProgress::new(1, 1)));
        assert!(!details.is_enrolled);
        assert!(details.progress.is_none());
    }

    #[test]
    fn test_listing_omits_bio() {
        let mut user = User::new("i@example.com".into(), "h".into(), "Ian".into(), UserRole::Instructor);
        user.profile.bio = Some("Teaches things".into());
        assert!(InstructorSummary::listing(&user).bio.is_none());
        assert_eq!(InstructorSummary::from_user(&user).bio.as_deref(), Some("Teaches things"));
    }

    #[test]
    fn test_listing_flattens_course() {
        let course = Course::new(Uuid::new_v4(), "Title".into(), "Description!".into());
        let json = serde_json::to_value(CourseListing { course, instructor: None }).unwrap();
        assert_eq!(json["title"], "Title");
        assert!(json["instructor"].is_null());
    }
}
