use actix_web::{web, HttpResponse};
use es_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::LoginRequest;
use crate::handlers::ApiError;

/// Handler for POST /api/auth/login
///
/// Unknown email and wrong password both answer 401 "Invalid email or password".
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner().validated()?;
    let response = state.auth.login(&request.email, &request.password).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(response, "Login successful")))
}
