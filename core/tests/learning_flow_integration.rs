//! Integration tests for the instructor-to-student learning flow

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use es_core::domain::entities::UserRole;
    use es_core::errors::DomainError;
    use es_core::repositories::Repositories;
    use es_core::services::auth::{AuthService, AuthServiceConfig, RegisterInput};
    use es_core::services::course::{
        CourseService, CreateCourseInput, NewLessonInput, NewSectionInput,
    };
    use es_core::services::enrollment::EnrollmentService;
    use es_core::services::manifest::ManifestService;
    use es_core::services::media::{MediaService, MockMediaGateway};
    use es_core::services::progress::{ProgressService, UpdateProgressInput};
    use es_core::services::token::{TokenService, TokenServiceConfig};

    struct Platform {
        auth: AuthService,
        courses: CourseService,
        enrollments: EnrollmentService,
        progress: ProgressService,
        manifest: ManifestService,
    }

    fn platform() -> Platform {
        let repos = Repositories::in_memory();
        let media = Arc::new(MediaService::new(Arc::new(MockMediaGateway::new()), "edusync"));
        let tokens = Arc::new(TokenService::new(TokenServiceConfig::default()));

        Platform {
            auth: AuthService::new(repos.users.clone(), tokens, AuthServiceConfig { bcrypt_cost: 4 }),
            courses: CourseService::new(&repos, media.clone()),
            enrollments: EnrollmentService::new(&repos),
            progress: ProgressService::new(&repos),
            manifest: ManifestService::new(&repos, media),
        }
    }

    fn account(email: &str, role: UserRole) -> RegisterInput {
        RegisterInput {
            email: email.to_string(),
            password: "password1".to_string(),
            name: "Someone".to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn test_complete_learning_flow() {
        let p = platform();

        let instructor = p.auth.register(account("a@example.com", UserRole::Instructor)).await.unwrap().user;
        let course = p
            .courses
            .create_course(
                instructor.id,
                CreateCourseInput {
                    title: "X course".to_string(),
                    description: "ten or more characters".to_string(),
                },
                None,
            )
            .await
            .unwrap();
        let section = p
            .courses
            .add_section(course.id, instructor.id, NewSectionInput { title: "Start".into(), order: 0 })
            .await
            .unwrap();
        let lesson = p
            .courses
            .add_lesson(
                course.id,
                instructor.id,
                NewLessonInput {
                    section_id: section.id,
                    title: "Hello".into(),
                    description: "The very first lesson".into(),
                    duration: 60,
                    order: 0,
                },
                vec![7; 32],
            )
            .await
            .unwrap();
        p.courses.publish_course(course.id, instructor.id).await.unwrap();

        let student = p.auth.register(account("b@example.com", UserRole::Student)).await.unwrap().user;
        p.enrollments.enroll_in_course(student.id, course.id).await.unwrap();

        p.progress
            .update_progress(student.id, UpdateProgressInput { lesson_id: lesson.id, watch_time: 30, completed: false })
            .await
            .unwrap();
        let progress = p.progress.get_course_progress(student.id, course.id).await.unwrap();
        assert_eq!((progress.completed, progress.total, progress.percentage), (0, 1, 0));

        p.progress
            .update_progress(student.id, UpdateProgressInput { lesson_id: lesson.id, watch_time: 60, completed: true })
            .await
            .unwrap();
        let progress = p.progress.get_course_progress(student.id, course.id).await.unwrap();
        assert_eq!(progress.percentage, 100);

        let details = p.courses.get_course(course.id, Some(student.id)).await.unwrap();
        assert!(details.is_enrolled);
        assert_eq!(details.progress.unwrap().percentage, 100);
    }

    #[tokio::test]
    async fn test_manifest_gated_by_enrollment() {
        let p = platform();

        let instructor = p.auth.register(account("a@example.com", UserRole::Instructor)).await.unwrap().user;
        let course = p
            .courses
            .create_course(
                instructor.id,
                CreateCourseInput {
                    title: "Offline".to_string(),
                    description: "download everything".to_string(),
                },
                None,
            )
            .await
            .unwrap();
        let section = p
            .courses
            .add_section(course.id, instructor.id, NewSectionInput { title: "Only".into(), order: 0 })
            .await
            .unwrap();
        p.courses
            .add_lesson(
                course.id,
                instructor.id,
                NewLessonInput {
                    section_id: section.id,
                    title: "Video".into(),
                    description: "A video to download".into(),
                    duration: 10,
                    order: 0,
                },
                vec![1],
            )
            .await
            .unwrap();
        p.courses.publish_course(course.id, instructor.id).await.unwrap();

        let student = p.auth.register(account("b@example.com", UserRole::Student)).await.unwrap().user;
        let denied = p.manifest.download_manifest(student.id, course.id).await;
        assert!(matches!(denied, Err(DomainError::Forbidden { .. })));

        p.enrollments.enroll_in_course(student.id, course.id).await.unwrap();
        let manifest = p.manifest.download_manifest(student.id, course.id).await.unwrap();
        let urls = &manifest.lessons[0].video_urls;
        for url in [&urls.auto, &urls.low, &urls.medium, &urls.high] {
            assert!(!url.is_empty());
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_any_case_conflicts() {
        let p = platform();
        p.auth.register(account("Dup@Example.com", UserRole::Student)).await.unwrap();

        let again = p.auth.register(account("dup@example.COM", UserRole::Instructor)).await;
        assert!(again.is_err());
        assert_eq!(again.unwrap_err().to_string(), "User with this email already exists");
    }
}
