//! Enrollment route handlers (student only)
//!
//! - `POST   /api/enrollments/{id}/enroll`
//! - `GET    /api/enrollments/my-courses`
//! - `DELETE /api/enrollments/{id}/unenroll`

use actix_web::{web, HttpResponse};
use es_shared::ApiResponse;
use uuid::Uuid;

use crate::app::AppState;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

/// Handler for POST /api/enrollments/{id}/enroll
///
/// 400 for an unpublished course, 409 when already enrolled.
pub async fn enroll(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let enrollment = state
        .enrollments
        .enroll_in_course(auth.user_id, path.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success_with_message(
        enrollment,
        "Enrolled in course successfully",
    )))
}

/// Handler for GET /api/enrollments/my-courses
pub async fn my_courses(
    state: web::Data<AppState>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError> {
    let courses = state.enrollments.get_enrolled_courses(auth.user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(courses)))
}

/// Handler for DELETE /api/enrollments/{id}/unenroll
pub async fn unenroll(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    state
        .enrollments
        .unenroll(auth.user_id, path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("Unenrolled from course successfully")))
}
