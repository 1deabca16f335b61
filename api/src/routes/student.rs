//! Student content routes
//!
//! - `GET /api/student/{id}/download-manifest`

use actix_web::{web, HttpResponse};
use es_shared::ApiResponse;
use uuid::Uuid;

use crate::app::AppState;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

/// Handler for GET /api/student/{id}/download-manifest
///
/// Everything a client needs to fetch a course for offline use: course
/// metadata, every lesson's streaming URLs in four qualities and every
/// resource's direct URL. 403 unless the caller is enrolled.
pub async fn download_manifest(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let course_id = path.into_inner();
    let manifest = state
        .manifest
        .download_manifest(auth.user_id, course_id)
        .await?;

    log::info!(
        "User {} fetched download manifest for course {} ({} lessons)",
        auth.user_id,
        course_id,
        manifest.lessons.len()
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(manifest)))
}
