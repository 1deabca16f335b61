//! Unit tests for progress service

use uuid::Uuid;

use crate::domain::entities::lesson::NewLesson;
use crate::domain::entities::{Enrollment, Lesson};
use crate::errors::DomainError;
use crate::repositories::Repositories;
use crate::services::progress::{ProgressService, UpdateProgressInput};

async fn seed_lesson(repos: &Repositories, course_id: Uuid, order: u32) -> Lesson {
    repos
        .lessons
        .create(Lesson::new(NewLesson {
            section_id: Uuid::new_v4(),
            course_id,
            title: format!("Lesson {}", order),
            description: "Watch closely".to_string(),
            video_url: "https://media.local/video/v".to_string(),
            video_id: "v".to_string(),
            duration: 600,
            order,
        }))
        .await
        .unwrap()
}

fn heartbeat(lesson_id: Uuid, watch_time: u32, completed: bool) -> UpdateProgressInput {
    UpdateProgressInput {
        lesson_id,
        watch_time,
        completed,
    }
}

#[tokio::test]
async fn test_update_progress_requires_enrollment() {
    let repos = Repositories::in_memory();
    let service = ProgressService::new(&repos);
    let lesson = seed_lesson(&repos, Uuid::new_v4(), 0).await;

    let result = service.update_progress(Uuid::new_v4(), heartbeat(lesson.id, 30, false)).await;
    match result {
        Err(DomainError::Forbidden { message }) => {
            assert_eq!(message, "You must be enrolled in the course to track progress")
        }
        other => panic!("expected Forbidden, got {:?}", other),
    }
}

#[tokio::test]
async fn test_update_progress_unknown_lesson() {
    let repos = Repositories::in_memory();
    let service = ProgressService::new(&repos);

    let result = service.update_progress(Uuid::new_v4(), heartbeat(Uuid::new_v4(), 30, false)).await;
    assert_eq!(result.unwrap_err().to_string(), "Lesson not found");
}

#[tokio::test]
async fn test_update_progress_overwrites_single_row() {
    let repos = Repositories::in_memory();
    let service = ProgressService::new(&repos);
    let course_id = Uuid::new_v4();
    let lesson = seed_lesson(&repos, course_id, 0).await;
    let student = Uuid::new_v4();
    repos.enrollments.create(Enrollment::new(student, course_id)).await.unwrap();

    let first = service.update_progress(student, heartbeat(lesson.id, 120, true)).await.unwrap();
    let second = service.update_progress(student, heartbeat(lesson.id, 60, false)).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.watch_time, 60);
    assert!(!second.completed);
    assert_eq!(second.course_id, course_id);
    assert!(second.last_watched >= first.last_watched);

    let stored = service.get_lesson_progress(student, lesson.id).await.unwrap().unwrap();
    assert_eq!(stored.watch_time, 60);
}

#[tokio::test]
async fn test_course_progress_counts_recorded_lessons() {
    let repos = Repositories::in_memory();
    let service = ProgressService::new(&repos);
    let course_id = Uuid::new_v4();
    let student = Uuid::new_v4();
    repos.enrollments.create(Enrollment::new(student, course_id)).await.unwrap();

    let lessons = [
        seed_lesson(&repos, course_id, 0).await,
        seed_lesson(&repos, course_id, 1).await,
        seed_lesson(&repos, course_id, 2).await,
    ];
    service.update_progress(student, heartbeat(lessons[0].id, 600, true)).await.unwrap();
    service.update_progress(student, heartbeat(lessons[1].id, 10, false)).await.unwrap();
    service.update_progress(student, heartbeat(lessons[2].id, 10, false)).await.unwrap();

    let progress = service.get_course_progress(student, course_id).await.unwrap();
    assert_eq!(progress.completed, 1);
    assert_eq!(progress.total, 3);
    assert_eq!(progress.percentage, 33);
}

#[tokio::test]
async fn test_course_progress_empty_is_zero() {
    let repos = Repositories::in_memory();
    let service = ProgressService::new(&repos);
    let course_id = Uuid::new_v4();
    let student = Uuid::new_v4();
    repos.enrollments.create(Enrollment::new(student, course_id)).await.unwrap();

    let progress = service.get_course_progress(student, course_id).await.unwrap();
    assert_eq!((progress.completed, progress.total, progress.percentage), (0, 0, 0));
}

#[tokio::test]
async fn test_course_progress_requires_enrollment() {
    let repos = Repositories::in_memory();
    let service = ProgressService::new(&repos);

    let result = service.get_course_progress(Uuid::new_v4(), Uuid::new_v4()).await;
    match result {
        Err(DomainError::Forbidden { message }) => {
            assert_eq!(message, "You must be enrolled in the course to view progress")
        }
        other => panic!("expected Forbidden, got {:?}", other),
    }
}

#[tokio::test]
async fn test_lesson_progress_absent_and_missing_lesson() {
    let repos = Repositories::in_memory();
    let service = ProgressService::new(&repos);
    let course_id = Uuid::new_v4();
    let lesson = seed_lesson(&repos, course_id, 0).await;
    let student = Uuid::new_v4();
    repos.enrollments.create(Enrollment::new(student, course_id)).await.unwrap();

    assert!(service.get_lesson_progress(student, lesson.id).await.unwrap().is_none());
    assert!(matches!(
        service.get_lesson_progress(student, Uuid::new_v4()).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_lesson_progress_requires_enrollment() {
    let repos = Repositories::in_memory();
    let service = ProgressService::new(&repos);
    let course_id = Uuid::new_v4();
    let lesson = seed_lesson(&repos, course_id, 0).await;

    let result = service.get_lesson_progress(Uuid::new_v4(), lesson.id).await;
    assert!(matches!(result, Err(DomainError::Forbidden { .. })));
}

#[tokio::test]
async fn test_lesson_progress_hidden_after_unenroll() {
    let repos = Repositories::in_memory();
    let service = ProgressService::new(&repos);
    let course_id = Uuid::new_v4();
    let lesson = seed_lesson(&repos, course_id, 0).await;
    let student = Uuid::new_v4();
    let enrollment = repos.enrollments.create(Enrollment::new(student, course_id)).await.unwrap();
    service.update_progress(student, heartbeat(lesson.id, 30, true)).await.unwrap();

    repos.enrollments.delete(enrollment.id).await.unwrap();

    match service.get_lesson_progress(student, lesson.id).await {
        Err(DomainError::Forbidden { message }) => {
            assert_eq!(message, "You must be enrolled in the course to view progress")
        }
        other => panic!("expected Forbidden, got {:?}", other),
    }
    assert!(matches!(
        service.get_course_progress(student, course_id).await,
        Err(DomainError::Forbidden { .. })
    ));
}
