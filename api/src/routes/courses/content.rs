use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use es_shared::ApiResponse;
use uuid::Uuid;

use crate::app::AppState;
use crate::dto::{CreateSectionRequest, LessonForm, ResourceForm};
use crate::handlers::{ApiError, MultipartForm};
use crate::middleware::AuthContext;

/// Handler for POST /api/courses/{id}/sections
///
/// # Request Body
///
/// ```json
/// { "title": "Getting started", "order": 0 }
/// ```
pub async fn add_section(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<CreateSectionRequest>,
) -> Result<HttpResponse, ApiError> {
    let input = request.into_inner().into_input()?;
    let section = state
        .courses
        .add_section(path.into_inner(), auth.user_id, input)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success_with_message(
        section,
        "Section added successfully",
    )))
}

/// Handler for POST /api/courses/{id}/lessons
///
/// Multipart fields `sectionId`, `title`, `description`, `duration`,
/// `order` and the `video` file. The duration detected by the media host
/// takes precedence over the submitted one.
pub async fn add_lesson(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let mut form = MultipartForm::read(payload, state.max_upload_size).await?;
    let video = form
        .take_file("video")
        .ok_or_else(|| ApiError::bad_request("Video file is required"))?;
    let input = LessonForm::from_form(&form).into_input()?;

    let lesson = state
        .courses
        .add_lesson(path.into_inner(), auth.user_id, input, video)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success_with_message(
        lesson,
        "Lesson added successfully",
    )))
}

/// Handler for POST /api/courses/{id}/resources
///
/// Multipart fields `title`, `fileType` and the `file` part.
pub async fn add_resource(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let mut form = MultipartForm::read(payload, state.max_upload_size).await?;
    let file = form
        .take_file("file")
        .ok_or_else(|| ApiError::bad_request("Resource file is required"))?;
    let input = ResourceForm::from_form(&form).into_input()?;

    let resource = state
        .courses
        .add_resource(path.into_inner(), auth.user_id, input, file)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success_with_message(
        resource,
        "Resource added successfully",
    )))
}
