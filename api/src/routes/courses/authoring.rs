use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use es_shared::ApiResponse;
use uuid::Uuid;

use crate::app::AppState;
use crate::dto::{CreateCourseForm, UpdateCourseForm};
use crate::handlers::{ApiError, MultipartForm};
use crate::middleware::AuthContext;

/// Handler for POST /api/courses
///
/// Multipart fields `title`, `description` and an optional `thumbnail`
/// image. The course starts unpublished.
pub async fn create_course(
    state: web::Data<AppState>,
    auth: AuthContext,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let mut form = MultipartForm::read(payload, state.max_upload_size).await?;
    let input = CreateCourseForm::from_form(&form).into_input()?;
    let thumbnail = form.take_file("thumbnail");

    let course = state
        .courses
        .create_course(auth.user_id, input, thumbnail)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success_with_message(
        course,
        "Course created successfully",
    )))
}

/// Handler for PUT /api/courses/{id}
///
/// Every field is optional; a new `thumbnail` replaces the old image.
pub async fn update_course(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let mut form = MultipartForm::read(payload, state.max_upload_size).await?;
    let input = UpdateCourseForm::from_form(&form).into_input()?;
    let thumbnail = form.take_file("thumbnail");

    let course = state
        .courses
        .update_course(path.into_inner(), auth.user_id, input, thumbnail)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
        course,
        "Course updated successfully",
    )))
}

/// Handler for DELETE /api/courses/{id}
pub async fn delete_course(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let course_id = path.into_inner();
    state.courses.delete_course(course_id, auth.user_id).await?;

    log::info!("Instructor {} deleted course {}", auth.user_id, course_id);

    Ok(HttpResponse::Ok().json(ApiResponse::message("Course deleted successfully")))
}

/// Handler for PUT /api/courses/{id}/publish
pub async fn publish_course(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let course = state
        .courses
        .publish_course(path.into_inner(), auth.user_id)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
        course,
        "Course published successfully",
    )))
}

/// Handler for GET /api/courses/instructor/my-courses
pub async fn instructor_courses(
    state: web::Data<AppState>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError> {
    let courses = state.courses.get_instructor_courses(auth.user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(courses)))
}
