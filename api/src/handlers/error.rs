//! Mapping of domain and request errors onto the JSON response envelope.

use actix_web::{
    error::{JsonPayloadError, PathError, QueryPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use es_core::errors::{AuthError, DomainError, TokenError, ValidationError as DomainValidationError};
use es_shared::{ApiResponse, FieldError};
use thiserror::Error;

/// Message returned for every 5xx so internals never reach the client
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Error type returned by every handler
#[derive(Debug, Error)]
pub enum ApiError {
    /// Error raised by a domain service
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request body failed field validation
    #[error("{message} ({} field errors)", .errors.len())]
    Validation {
        message: String,
        errors: Vec<FieldError>,
    },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    /// Validation failure with the standard envelope message
    pub fn validation(errors: Vec<FieldError>) -> Self {
        ApiError::Validation {
            message: "Validation failed".to_string(),
            errors,
        }
    }

    /// Message shown to the client
    fn client_message(&self) -> String {
        if self.status_code().is_server_error() {
            return INTERNAL_ERROR_MESSAGE.to_string();
        }

        match self {
            ApiError::Domain(DomainError::Token(_)) => "Invalid or expired token".to_string(),
            ApiError::Domain(DomainError::Unauthorized) => "Authentication required".to_string(),
            ApiError::Domain(error) => error.to_string(),
            ApiError::Validation { message, .. } => message.clone(),
            ApiError::BadRequest(message)
            | ApiError::Unauthorized(message)
            | ApiError::Forbidden(message)
            | ApiError::NotFound(message)
            | ApiError::PayloadTooLarge(message) => message.clone(),
        }
    }

    fn field_errors(&self) -> Vec<FieldError> {
        match self {
            ApiError::Validation { errors, .. } => errors.clone(),
            ApiError::Domain(DomainError::ValidationErr(error)) => error.field_errors(),
            _ => Vec::new(),
        }
    }
}

impl From<DomainValidationError> for ApiError {
    fn from(error: DomainValidationError) -> Self {
        ApiError::validation(error.field_errors())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(error) => domain_status(error),
            ApiError::Validation { .. } | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("Request failed: {}", self);
        } else {
            log::debug!("Request rejected ({}): {}", status.as_u16(), self);
        }

        let body = match self.field_errors() {
            errors if !errors.is_empty() => ApiResponse::validation(self.client_message(), errors),
            _ => ApiResponse::error(self.client_message()),
        };

        HttpResponse::build(status).json(body)
    }
}

fn domain_status(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation { .. }
        | DomainError::BusinessRule { .. }
        | DomainError::ValidationErr(_) => StatusCode::BAD_REQUEST,
        DomainError::Unauthorized => StatusCode::UNAUTHORIZED,
        DomainError::Token(TokenError::TokenGenerationFailed) => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::Token(_) => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden { .. } => StatusCode::FORBIDDEN,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Conflict { .. } => StatusCode::CONFLICT,
        DomainError::Auth(auth) => match auth {
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::UserAlreadyExists => StatusCode::CONFLICT,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::PasswordHashing { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        },
        DomainError::Upstream { .. } | DomainError::Database { .. } | DomainError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// `JsonConfig` error handler: malformed bodies become a 400 envelope
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected JSON body: {}", error);
    match error {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            ApiError::PayloadTooLarge("Request body too large".to_string()).into()
        }
        _ => ApiError::bad_request("Invalid request body").into(),
    }
}

/// `PathConfig` error handler: ids that are not UUIDs
pub fn path_error_handler(error: PathError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected path parameter: {}", error);
    ApiError::bad_request("Invalid ID format").into()
}

/// `QueryConfig` error handler
pub fn query_error_handler(error: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected query string: {}", error);
    ApiError::bad_request("Invalid query parameters").into()
}

/// Default service for unknown routes
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound(format!(
        "Route {} {} not found",
        req.method(),
        req.path()
    )))
}
