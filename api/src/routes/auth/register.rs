use actix_web::{web, HttpResponse};
use es_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::RegisterRequest;
use crate::handlers::ApiError;

/// Handler for POST /api/auth/register
///
/// # Request Body
///
/// ```json
/// {
///     "email": "ann@example.com",
///     "password": "secret1",
///     "name": "Ann",
///     "role": "instructor"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "success": true,
///     "message": "User registered successfully",
///     "data": { "user": { "id": "...", "email": "ann@example.com", ... }, "token": "..." }
/// }
/// ```
///
/// ## Errors
/// - 400 with field errors when the body fails validation
/// - 409 when the email is already registered (any case)
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    let input = request.into_inner().into_input()?;
    let response = state.auth.register(input).await?;

    log::info!("Registered user {} as {}", response.user.id, response.user.role);

    Ok(HttpResponse::Created().json(ApiResponse::success_with_message(
        response,
        "User registered successfully",
    )))
}
