//! Progress route handlers (student only, enrollment required)
//!
//! - `POST /api/progress`
//! - `GET  /api/progress/course/{course_id}`
//! - `GET  /api/progress/lesson/{lesson_id}`

use actix_web::{web, HttpResponse};
use es_shared::ApiResponse;
use uuid::Uuid;

use crate::app::AppState;
use crate::dto::UpdateProgressRequest;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

/// Handler for POST /api/progress
///
/// # Request Body
///
/// ```json
/// { "lessonId": "...", "watchTime": 30, "completed": false }
/// ```
///
/// Upserts the caller's record for the lesson.
pub async fn update_progress(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<UpdateProgressRequest>,
) -> Result<HttpResponse, ApiError> {
    let input = request.into_inner().into_input()?;
    let progress = state.progress.update_progress(auth.user_id, input).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
        progress,
        "Progress updated successfully",
    )))
}

/// Handler for GET /api/progress/course/{course_id}
pub async fn course_progress(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let summary = state
        .progress
        .get_course_progress(auth.user_id, path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(summary)))
}

/// Handler for GET /api/progress/lesson/{lesson_id}
///
/// `data` is `null` when the lesson has no record yet.
pub async fn lesson_progress(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let progress = state
        .progress
        .get_lesson_progress(auth.user_id, path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(progress)))
}
