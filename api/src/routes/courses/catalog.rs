use actix_web::{web, HttpResponse};
use es_shared::ApiResponse;
use uuid::Uuid;

use crate::app::AppState;
use crate::dto::CourseSearchQuery;
use crate::handlers::ApiError;
use crate::middleware::OptionalAuth;

/// Handler for GET /api/courses
///
/// Published courses, newest first, optionally filtered by `search`.
pub async fn list_courses(
    state: web::Data<AppState>,
    query: web::Query<CourseSearchQuery>,
) -> Result<HttpResponse, ApiError> {
    let courses = state
        .courses
        .get_published_courses(query.search.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(courses)))
}

/// Handler for GET /api/courses/{id}
///
/// A valid bearer credential adds the caller's `isEnrolled` and `progress`;
/// without one the course is returned as seen by an anonymous visitor.
pub async fn get_course(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    auth: OptionalAuth,
) -> Result<HttpResponse, ApiError> {
    let viewer = auth.0.map(|context| context.user_id);
    let details = state.courses.get_course(path.into_inner(), viewer).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(details)))
}
