//! Unit tests for course catalog service

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::user::{User, UserRole};
use crate::domain::entities::Enrollment;
use crate::errors::DomainError;
use crate::repositories::Repositories;
use crate::services::course::{
    CourseService, CreateCourseInput, NewLessonInput, NewResourceInput, NewSectionInput,
    UpdateCourseInput,
};
use crate::services::media::{MediaKind, MediaService, MockMediaGateway};

struct Fixture {
    repos: Repositories,
    gateway: Arc<MockMediaGateway>,
    service: CourseService,
    instructor: User,
}

async fn fixture() -> Fixture {
    let repos = Repositories::in_memory();
    let gateway = Arc::new(MockMediaGateway::new());
    let media = Arc::new(MediaService::new(gateway.clone(), "edusync"));
    let service = CourseService::new(&repos, media);

    let instructor = repos
        .users
        .create(User::new(
            "mentor@example.com".to_string(),
            "hash".to_string(),
            "Tess".to_string(),
            UserRole::Instructor,
        ))
        .await
        .unwrap();

    Fixture {
        repos,
        gateway,
        service,
        instructor,
    }
}

fn course_input(title: &str) -> CreateCourseInput {
    CreateCourseInput {
        title: title.to_string(),
        description: "A description that is long enough".to_string(),
    }
}

fn lesson_input(section_id: Uuid, order: u32) -> NewLessonInput {
    NewLessonInput {
        section_id,
        title: format!("Lesson {}", order),
        description: "Lesson description text".to_string(),
        duration: 120,
        order,
    }
}

#[tokio::test]
async fn test_create_course_without_thumbnail() {
    let f = fixture().await;
    let course = f
        .service
        .create_course(f.instructor.id, course_input("Rust 101"), None)
        .await
        .unwrap();

    assert!(!course.published);
    assert_eq!(course.thumbnail, "");
    assert!(course.thumbnail_id.is_none());
    assert!(f.gateway.uploads().await.is_empty());
}

#[tokio::test]
async fn test_create_course_uploads_thumbnail() {
    let f = fixture().await;
    let course = f
        .service
        .create_course(f.instructor.id, course_input("Rust 101"), Some(vec![1; 10]))
        .await
        .unwrap();

    let uploads = f.gateway.uploads().await;
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].folder, "edusync/thumbnails");
    assert!(uploads[0].name.starts_with("course-"));
    assert!(course.thumbnail.contains("edusync/thumbnails"));
    assert!(course.thumbnail_id.is_some());
}

#[tokio::test]
async fn test_ownership_enforced_on_every_mutation() {
    let f = fixture().await;
    let course = f
        .service
        .create_course(f.instructor.id, course_input("Owned"), None)
        .await
        .unwrap();
    let section = f
        .service
        .add_section(course.id, f.instructor.id, NewSectionInput { title: "Intro".into(), order: 0 })
        .await
        .unwrap();
    let intruder = Uuid::new_v4();

    let results = vec![
        f.service
            .update_course(course.id, intruder, UpdateCourseInput::default(), None)
            .await
            .map(|_| ()),
        f.service.publish_course(course.id, intruder).await.map(|_| ()),
        f.service
            .add_section(course.id, intruder, NewSectionInput { title: "Hack".into(), order: 1 })
            .await
            .map(|_| ()),
        f.service
            .add_lesson(course.id, intruder, lesson_input(section.id, 0), vec![0])
            .await
            .map(|_| ()),
        f.service
            .add_resource(
                course.id,
                intruder,
                NewResourceInput { title: "Notes".into(), file_type: "pdf".into() },
                vec![0],
            )
            .await
            .map(|_| ()),
        f.service.delete_course(course.id, intruder).await,
    ];

    for result in results {
        assert!(matches!(result, Err(DomainError::Forbidden { .. })), "got {:?}", result);
    }
    assert!(f.repos.courses.find_by_id(course.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_missing_course_is_not_found() {
    let f = fixture().await;
    let result = f.service.publish_course(Uuid::new_v4(), f.instructor.id).await;
    match result {
        Err(DomainError::NotFound { resource }) => assert_eq!(resource, "Course"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_update_replaces_thumbnail_and_text() {
    let f = fixture().await;
    let course = f
        .service
        .create_course(f.instructor.id, course_input("Before"), Some(vec![1]))
        .await
        .unwrap();
    let old_id = course.thumbnail_id.clone().unwrap();

    let updated = f
        .service
        .update_course(
            course.id,
            f.instructor.id,
            UpdateCourseInput { title: Some("After".into()), description: None },
            Some(vec![2, 2]),
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "After");
    assert_eq!(updated.description, course.description);
    assert_ne!(updated.thumbnail_id.as_deref(), Some(old_id.as_str()));
    assert_eq!(f.gateway.deletions().await, vec![(old_id, MediaKind::Image)]);
    assert!(!updated.published);
}

#[tokio::test]
async fn test_add_lesson_prefers_host_duration() {
    let f = fixture().await;
    f.gateway.set_video_duration(Some(300)).await;
    let course = f
        .service
        .create_course(f.instructor.id, course_input("Video"), None)
        .await
        .unwrap();
    let section = f
        .service
        .add_section(course.id, f.instructor.id, NewSectionInput { title: "Intro".into(), order: 0 })
        .await
        .unwrap();

    let lesson = f
        .service
        .add_lesson(course.id, f.instructor.id, lesson_input(section.id, 0), vec![9; 64])
        .await
        .unwrap();

    assert_eq!(lesson.duration, 300);
    assert_eq!(lesson.course_id, course.id);
    let uploads = f.gateway.uploads().await;
    assert_eq!(uploads[0].folder, format!("edusync/courses/{}/videos", course.id));
    assert_eq!(uploads[0].kind, MediaKind::Video);

    let stored = f.repos.sections.find_by_id(section.id).await.unwrap().unwrap();
    assert_eq!(stored.lesson_ids, vec![lesson.id]);
}

#[tokio::test]
async fn test_add_lesson_falls_back_to_caller_duration() {
    let f = fixture().await;
    let course = f
        .service
        .create_course(f.instructor.id, course_input("Video"), None)
        .await
        .unwrap();
    let section = f
        .service
        .add_section(course.id, f.instructor.id, NewSectionInput { title: "Intro".into(), order: 0 })
        .await
        .unwrap();

    let lesson = f
        .service
        .add_lesson(course.id, f.instructor.id, lesson_input(section.id, 0), vec![1])
        .await
        .unwrap();
    assert_eq!(lesson.duration, 120);
}

#[tokio::test]
async fn test_add_lesson_rejects_section_from_other_course() {
    let f = fixture().await;
    let first = f
        .service
        .create_course(f.instructor.id, course_input("First"), None)
        .await
        .unwrap();
    let second = f
        .service
        .create_course(f.instructor.id, course_input("Second"), None)
        .await
        .unwrap();
    let foreign = f
        .service
        .add_section(second.id, f.instructor.id, NewSectionInput { title: "Other".into(), order: 0 })
        .await
        .unwrap();

    let result = f
        .service
        .add_lesson(first.id, f.instructor.id, lesson_input(foreign.id, 0), vec![1])
        .await;

    match result {
        Err(DomainError::NotFound { resource }) => assert_eq!(resource, "Section"),
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert!(f.gateway.uploads().await.is_empty());
}

#[tokio::test]
async fn test_add_resource_records_uploaded_size() {
    let f = fixture().await;
    let course = f
        .service
        .create_course(f.instructor.id, course_input("Docs"), None)
        .await
        .unwrap();

    let resource = f
        .service
        .add_resource(
            course.id,
            f.instructor.id,
            NewResourceInput { title: "Slides".into(), file_type: "pdf".into() },
            vec![0; 2048],
        )
        .await
        .unwrap();

    assert_eq!(resource.size, 2048);
    assert_eq!(resource.file_type, "pdf");
    let stored = f.repos.courses.find_by_id(course.id).await.unwrap().unwrap();
    assert_eq!(stored.resource_ids, vec![resource.id]);
    assert_eq!(f.gateway.uploads().await[0].kind, MediaKind::Raw);
}

#[tokio::test]
async fn test_get_course_builds_sorted_hierarchy() {
    let f = fixture().await;
    let course = f
        .service
        .create_course(f.instructor.id, course_input("Tree"), None)
        .await
        .unwrap();
    let later = f
        .service
        .add_section(course.id, f.instructor.id, NewSectionInput { title: "Later".into(), order: 2 })
        .await
        .unwrap();
    let first = f
        .service
        .add_section(course.id, f.instructor.id, NewSectionInput { title: "First".into(), order: 1 })
        .await
        .unwrap();
    for order in [3, 1] {
        f.service
            .add_lesson(course.id, f.instructor.id, lesson_input(first.id, order), vec![1])
            .await
            .unwrap();
    }

    let details = f.service.get_course(course.id, None).await.unwrap();

    assert_eq!(details.sections.len(), 2);
    assert_eq!(details.sections[0].id, first.id);
    assert_eq!(details.sections[1].id, later.id);
    let orders: Vec<u32> = details.sections[0].lessons.iter().map(|l| l.order).collect();
    assert_eq!(orders, vec![1, 3]);
    assert_eq!(details.instructor.unwrap().name, "Tess");
    assert!(!details.is_enrolled);
    assert!(details.progress.is_none());
}

#[tokio::test]
async fn test_get_course_reports_viewer_enrollment() {
    let f = fixture().await;
    let course = f
        .service
        .create_course(f.instructor.id, course_input("Viewer"), None)
        .await
        .unwrap();
    let student = Uuid::new_v4();
    f.repos.enrollments.create(Enrollment::new(student, course.id)).await.unwrap();

    let enrolled = f.service.get_course(course.id, Some(student)).await.unwrap();
    assert!(enrolled.is_enrolled);
    assert_eq!(enrolled.progress.unwrap().percentage, 0);

    let stranger = f.service.get_course(course.id, Some(Uuid::new_v4())).await.unwrap();
    assert!(!stranger.is_enrolled);
    assert!(stranger.progress.is_none());
}

#[tokio::test]
async fn test_published_listing_and_search() {
    let f = fixture().await;
    let rust = f
        .service
        .create_course(f.instructor.id, course_input("Rust in Practice"), None)
        .await
        .unwrap();
    f.service
        .create_course(f.instructor.id, course_input("Unreleased Rust"), None)
        .await
        .unwrap();
    f.service.publish_course(rust.id, f.instructor.id).await.unwrap();

    let all = f.service.get_published_courses(None).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].course.id, rust.id);
    assert_eq!(all[0].instructor.as_ref().unwrap().name, "Tess");

    assert_eq!(f.service.get_published_courses(Some("practice")).await.unwrap().len(), 1);
    assert!(f.service.get_published_courses(Some("cobol")).await.unwrap().is_empty());
    assert_eq!(f.service.get_published_courses(Some("   ")).await.unwrap().len(), 1);

    let mine = f.service.get_instructor_courses(f.instructor.id).await.unwrap();
    assert_eq!(mine.len(), 2);
}

#[tokio::test]
async fn test_delete_course_cascades_and_survives_media_failures() {
    let f = fixture().await;
    let course = f
        .service
        .create_course(f.instructor.id, course_input("Doomed"), Some(vec![1]))
        .await
        .unwrap();
    let section = f
        .service
        .add_section(course.id, f.instructor.id, NewSectionInput { title: "Only".into(), order: 0 })
        .await
        .unwrap();
    let lesson = f
        .service
        .add_lesson(course.id, f.instructor.id, lesson_input(section.id, 0), vec![1])
        .await
        .unwrap();
    f.service
        .add_resource(
            course.id,
            f.instructor.id,
            NewResourceInput { title: "Notes".into(), file_type: "pdf".into() },
            vec![1],
        )
        .await
        .unwrap();
    let student = Uuid::new_v4();
    f.repos.enrollments.create(Enrollment::new(student, course.id)).await.unwrap();
    f.repos.progress.upsert(student, lesson.id, course.id, 10, false).await.unwrap();

    f.gateway.fail_deletes(true);
    f.service.delete_course(course.id, f.instructor.id).await.unwrap();

    assert!(f.repos.courses.find_by_id(course.id).await.unwrap().is_none());
    assert!(f.repos.sections.find_by_course(course.id).await.unwrap().is_empty());
    assert!(f.repos.lessons.find_by_course(course.id).await.unwrap().is_empty());
    assert!(f.repos.resources.find_by_course(course.id).await.unwrap().is_empty());
    assert!(!f.repos.enrollments.is_enrolled(student, course.id).await.unwrap());
    assert!(f
        .repos
        .progress
        .find_by_user_and_course(student, course.id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_delete_course_removes_every_asset() {
    let f = fixture().await;
    let course = f
        .service
        .create_course(f.instructor.id, course_input("Assets"), Some(vec![1]))
        .await
        .unwrap();
    let section = f
        .service
        .add_section(course.id, f.instructor.id, NewSectionInput { title: "Only".into(), order: 0 })
        .await
        .unwrap();
    f.service
        .add_lesson(course.id, f.instructor.id, lesson_input(section.id, 0), vec![1])
        .await
        .unwrap();

    f.service.delete_course(course.id, f.instructor.id).await.unwrap();

    let kinds: Vec<MediaKind> = f.gateway.deletions().await.into_iter().map(|(_, k)| k).collect();
    assert_eq!(kinds, vec![MediaKind::Video, MediaKind::Image]);
}
