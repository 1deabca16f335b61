use actix_web::{web, HttpResponse};
use es_shared::ApiResponse;

use crate::app::AppState;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

/// Handler for GET /api/auth/me
///
/// Returns the caller's sanitized user record.
pub async fn me(state: web::Data<AppState>, auth: AuthContext) -> Result<HttpResponse, ApiError> {
    let user = state.auth.get_me(auth.user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(user)))
}
