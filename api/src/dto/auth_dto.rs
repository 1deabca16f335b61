use es_core::domain::entities::UserRole;
use es_core::services::auth::RegisterInput;
use serde::Deserialize;
use validator::Validate;

use super::validation::{
    validate_email, validate_name, validate_password, validate_password_present, validate_role,
    validate_with,
};
use crate::handlers::ApiError;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterRequest {
    #[validate(custom = "validate_email")]
    pub email: String,
    #[validate(custom = "validate_password")]
    pub password: String,
    #[validate(custom = "validate_name")]
    pub name: String,
    /// "student" (default) or "instructor"
    #[validate(custom = "validate_role")]
    pub role: Option<String>,
}

impl RegisterRequest {
    /// Validates the body and converts it into the service input
    pub fn into_input(self) -> Result<RegisterInput, ApiError> {
        validate_with(&self, |_| {})?;

        let role = match self.role.as_deref() {
            Some(role) => role.parse::<UserRole>().map_err(ApiError::bad_request)?,
            None => UserRole::default(),
        };

        Ok(RegisterInput {
            email: self.email,
            password: self.password,
            name: self.name,
            role,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginRequest {
    #[validate(custom = "validate_email")]
    pub email: String,
    #[validate(custom = "validate_password_present")]
    pub password: String,
}

impl LoginRequest {
    pub fn validated(self) -> Result<Self, ApiError> {
        validate_with(&self, |_| {})?;
        Ok(self)
    }
}
