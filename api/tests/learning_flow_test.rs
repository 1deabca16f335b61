//! End-to-end HTTP scenarios: an instructor publishes a course, a student
//! enrolls, tracks progress and fetches the download manifest.

mod common;

#[cfg(test)]
mod tests {
    use actix_web::test;
    use serde_json::json;

    use crate::common::{
        add_section_and_lesson, bearer, create_course, init_app, publish, register, send,
        test_context,
    };

    #[actix_web::test]
    async fn test_complete_learning_flow() {
        let ctx = test_context();
        let app = init_app(&ctx).await;

        let (_, instructor) = register(&app, "a@example.com", "instructor").await;
        let course_id = create_course(&app, &instructor, "X course").await;
        let (_, lesson_id) = add_section_and_lesson(&app, &instructor, &course_id).await;
        publish(&app, &instructor, &course_id).await;

        let (_, student) = register(&app, "b@example.com", "student").await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/enrollments/{}/enroll", course_id))
            .insert_header(bearer(&student))
            .to_request();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, 201);
        assert_eq!(body["message"], "Enrolled in course successfully");

        let req = test::TestRequest::post()
            .uri("/api/progress")
            .insert_header(bearer(&student))
            .set_json(json!({"lessonId": lesson_id, "watchTime": 30, "completed": false}))
            .to_request();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, 200);
        assert_eq!(body["message"], "Progress updated successfully");

        let req = test::TestRequest::get()
            .uri(&format!("/api/progress/course/{}", course_id))
            .insert_header(bearer(&student))
            .to_request();
        let (_, body) = send(&app, req).await;
        assert_eq!(body["data"], json!({"completed": 0, "total": 1, "percentage": 0}));

        let req = test::TestRequest::post()
            .uri("/api/progress")
            .insert_header(bearer(&student))
            .set_json(json!({"lessonId": lesson_id, "watchTime": 120, "completed": true}))
            .to_request();
        let (status, _) = send(&app, req).await;
        assert_eq!(status, 200);

        let req = test::TestRequest::get()
            .uri(&format!("/api/progress/course/{}", course_id))
            .insert_header(bearer(&student))
            .to_request();
        let (_, body) = send(&app, req).await;
        assert_eq!(body["data"]["percentage"], 100);

        let req = test::TestRequest::get()
            .uri(&format!("/api/progress/lesson/{}", lesson_id))
            .insert_header(bearer(&student))
            .to_request();
        let (_, body) = send(&app, req).await;
        assert_eq!(body["data"]["watchTime"], 120);
        assert_eq!(body["data"]["completed"], true);

        let req = test::TestRequest::get()
            .uri(&format!("/api/courses/{}", course_id))
            .insert_header(bearer(&student))
            .to_request();
        let (_, body) = send(&app, req).await;
        assert_eq!(body["data"]["isEnrolled"], true);
        assert_eq!(body["data"]["progress"]["percentage"], 100);
        assert_eq!(body["data"]["sections"][0]["lessons"][0]["id"], lesson_id.as_str());
    }

    #[actix_web::test]
    async fn test_manifest_requires_enrollment() {
        let ctx = test_context();
        let app = init_app(&ctx).await;

        let (_, instructor) = register(&app, "a@example.com", "instructor").await;
        let course_id = create_course(&app, &instructor, "Offline course").await;
        let (section_id, lesson_id) = add_section_and_lesson(&app, &instructor, &course_id).await;
        publish(&app, &instructor, &course_id).await;
        let (_, student) = register(&app, "b@example.com", "student").await;

        let manifest_uri = format!("/api/student/{}/download-manifest", course_id);

        let req = test::TestRequest::get()
            .uri(&manifest_uri)
            .insert_header(bearer(&student))
            .to_request();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, 403);
        assert_eq!(body["message"], "You must be enrolled to download course content");

        let req = test::TestRequest::post()
            .uri(&format!("/api/enrollments/{}/enroll", course_id))
            .insert_header(bearer(&student))
            .to_request();
        send(&app, req).await;

        let req = test::TestRequest::get()
            .uri(&manifest_uri)
            .insert_header(bearer(&student))
            .to_request();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, 200);

        let manifest = &body["data"];
        assert_eq!(manifest["course"]["id"], course_id.as_str());
        let lesson = &manifest["lessons"][0];
        assert_eq!(lesson["id"], lesson_id.as_str());
        assert_eq!(lesson["sectionId"], section_id.as_str());
        for quality in ["auto", "low", "medium", "high"] {
            let url = lesson["videoUrls"][quality].as_str().unwrap();
            assert!(!url.is_empty(), "{} url missing", quality);
        }
        assert_ne!(lesson["videoUrls"]["low"], lesson["videoUrls"]["high"]);
    }

    #[actix_web::test]
    async fn test_enrollment_rules() {
        let ctx = test_context();
        let app = init_app(&ctx).await;

        let (_, instructor) = register(&app, "a@example.com", "instructor").await;
        let course_id = create_course(&app, &instructor, "Enrollment rules").await;
        let (_, student) = register(&app, "b@example.com", "student").await;
        let enroll_uri = format!("/api/enrollments/{}/enroll", course_id);

        let req = test::TestRequest::post()
            .uri(&enroll_uri)
            .insert_header(bearer(&student))
            .to_request();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, 400);
        assert_eq!(body["message"], "Cannot enroll in unpublished course");

        publish(&app, &instructor, &course_id).await;

        let req = test::TestRequest::post()
            .uri(&enroll_uri)
            .insert_header(bearer(&student))
            .to_request();
        let (status, _) = send(&app, req).await;
        assert_eq!(status, 201);

        let req = test::TestRequest::post()
            .uri(&enroll_uri)
            .insert_header(bearer(&student))
            .to_request();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, 409);
        assert_eq!(body["message"], "Already enrolled in this course");

        let req = test::TestRequest::get()
            .uri("/api/enrollments/my-courses")
            .insert_header(bearer(&student))
            .to_request();
        let (_, body) = send(&app, req).await;
        let enrolled = body["data"].as_array().unwrap();
        assert_eq!(enrolled.len(), 1);
        assert_eq!(enrolled[0]["course"]["id"], course_id.as_str());

        let req = test::TestRequest::delete()
            .uri(&format!("/api/enrollments/{}/unenroll", course_id))
            .insert_header(bearer(&student))
            .to_request();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, 200);
        assert_eq!(body["message"], "Unenrolled from course successfully");

        let req = test::TestRequest::delete()
            .uri(&format!("/api/enrollments/{}/unenroll", course_id))
            .insert_header(bearer(&student))
            .to_request();
        let (status, _) = send(&app, req).await;
        assert_eq!(status, 404);
    }

    #[actix_web::test]
    async fn test_progress_requires_enrollment() {
        let ctx = test_context();
        let app = init_app(&ctx).await;

        let (_, instructor) = register(&app, "a@example.com", "instructor").await;
        let course_id = create_course(&app, &instructor, "Gated progress").await;
        let (_, lesson_id) = add_section_and_lesson(&app, &instructor, &course_id).await;
        let (_, student) = register(&app, "b@example.com", "student").await;

        let req = test::TestRequest::post()
            .uri("/api/progress")
            .insert_header(bearer(&student))
            .set_json(json!({"lessonId": lesson_id, "watchTime": 10, "completed": false}))
            .to_request();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, 403);
        assert_eq!(body["message"], "You must be enrolled in the course to track progress");

        let req = test::TestRequest::get()
            .uri(&format!("/api/progress/lesson/{}", lesson_id))
            .insert_header(bearer(&student))
            .to_request();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, 403);
        assert_eq!(body["message"], "You must be enrolled in the course to view progress");

        let req = test::TestRequest::post()
            .uri("/api/progress")
            .insert_header(bearer(&student))
            .set_json(json!({"lessonId": "nope", "watchTime": -1}))
            .to_request();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, 400);
        let fields: Vec<&str> = body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["lessonId", "watchTime"]);
    }
}
