//! JWT authentication middleware for protecting API endpoints.
//!
//! The middleware extracts the bearer credential from the Authorization
//! header, verifies it with the core `TokenService` held in `AppState`,
//! optionally enforces a role, and injects the caller's `AuthContext` into
//! the request extensions.

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderMap, AUTHORIZATION},
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use es_core::{
    domain::entities::{Claims, UserRole},
    errors::{DomainError, TokenError},
    services::token::TokenService,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};
use uuid::Uuid;

use crate::app::AppState;
use crate::handlers::ApiError;

/// Caller identity injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub email: String,
    pub role: UserRole,
}

impl AuthContext {
    /// Creates a new authentication context from JWT claims
    pub fn from_claims(claims: Claims) -> Result<Self, DomainError> {
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidTokenFormat))?;
        Ok(Self {
            user_id,
            email: claims.email,
            role: claims.role,
        })
    }

    /// Verifies `token` and builds the context
    fn from_token(tokens: &TokenService, token: &str) -> Result<Self, DomainError> {
        tokens.verify(token).and_then(Self::from_claims)
    }
}

/// JWT authentication middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtAuth {
    required_role: Option<UserRole>,
}

impl JwtAuth {
    /// Any authenticated caller
    pub fn new() -> Self {
        Self { required_role: None }
    }

    /// Authenticated callers holding `role`; others get 403
    pub fn require_role(role: UserRole) -> Self {
        Self {
            required_role: Some(role),
        }
    }

    pub fn instructor() -> Self {
        Self::require_role(UserRole::Instructor)
    }

    pub fn student() -> Self {
        Self::require_role(UserRole::Student)
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            required_role: self.required_role,
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    required_role: Option<UserRole>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let required_role = self.required_role;

        Box::pin(async move {
            match authenticate(&req, required_role) {
                Ok(auth_context) => {
                    // Inject auth context into request extensions
                    req.extensions_mut().insert(auth_context);
                    service.call(req).await.map(ServiceResponse::map_into_left_body)
                }
                Err(error) => Ok(req.error_response(error).map_into_right_body()),
            }
        })
    }
}

/// Resolves the caller of `req`, enforcing `required_role` when set
fn authenticate(req: &ServiceRequest, required_role: Option<UserRole>) -> Result<AuthContext, ApiError> {
    let token = extract_bearer_token(req.headers())
        .ok_or_else(|| ApiError::unauthorized("Authentication required"))?;

    let state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
        ApiError::Domain(DomainError::internal("Application state is not registered"))
    })?;

    let auth_context = AuthContext::from_token(&state.tokens, &token).map_err(|e| {
        log::debug!("Rejected bearer credential: {}", e);
        ApiError::unauthorized("Invalid or expired token")
    })?;

    if let Some(role) = required_role {
        if auth_context.role != role {
            log::debug!(
                "User {} with role {} denied access to {}",
                auth_context.user_id,
                auth_context.role,
                req.path()
            );
            return Err(ApiError::forbidden("Insufficient permissions"));
        }
    }

    Ok(auth_context)
}

/// Extracts the token from `Authorization: Bearer <token>`
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::unauthorized("Authentication required").into());

        ready(result)
    }
}

/// Extractor for optional authentication
///
/// Used on public routes; a missing or invalid credential yields `None`
/// instead of an error.
pub struct OptionalAuth(pub Option<AuthContext>);

impl FromRequest for OptionalAuth {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        if let Some(context) = req.extensions().get::<AuthContext>().cloned() {
            return ready(Ok(OptionalAuth(Some(context))));
        }

        let context = extract_bearer_token(req.headers()).and_then(|token| {
            let state = req.app_data::<web::Data<AppState>>()?;
            AuthContext::from_token(&state.tokens, &token).ok()
        });

        ready(Ok(OptionalAuth(context)))
    }
}
