//! Field rules shared by the request DTOs and the bridge from
//! `validator` errors to the response envelope.

use es_shared::validation::validators;
use es_shared::FieldError;
use std::borrow::Cow;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::handlers::ApiError;

/// Builds a rule failure carrying the client-facing message
pub fn rule(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn min_chars(value: &str, min: usize, message: &'static str) -> Result<(), ValidationError> {
    if validators::min_chars(value, min) {
        Ok(())
    } else {
        Err(rule("length", message))
    }
}

pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if validators::is_valid_email(value) {
        Ok(())
    } else {
        Err(rule("email", "Invalid email address"))
    }
}

pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    min_chars(value, 6, "Password must be at least 6 characters")
}

pub fn validate_password_present(value: &str) -> Result<(), ValidationError> {
    if validators::not_empty(value) {
        Ok(())
    } else {
        Err(rule("required", "Password is required"))
    }
}

pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    min_chars(value, 2, "Name must be at least 2 characters")
}

pub fn validate_role(value: &str) -> Result<(), ValidationError> {
    match value {
        "student" | "instructor" => Ok(()),
        _ => Err(rule("role", "Role must be either student or instructor")),
    }
}

pub fn validate_title(value: &str) -> Result<(), ValidationError> {
    min_chars(value, 3, "Title must be at least 3 characters")
}

pub fn validate_description(value: &str) -> Result<(), ValidationError> {
    min_chars(value, 10, "Description must be at least 10 characters")
}

pub fn validate_section_title(value: &str) -> Result<(), ValidationError> {
    min_chars(value, 3, "Section title must be at least 3 characters")
}

pub fn validate_section_id(value: &str) -> Result<(), ValidationError> {
    uuid_rule(value, "Section ID is required")
}

pub fn validate_lesson_id(value: &str) -> Result<(), ValidationError> {
    uuid_rule(value, "Lesson ID is required")
}

pub fn validate_file_type(value: &str) -> Result<(), ValidationError> {
    if validators::not_empty(value) {
        Ok(())
    } else {
        Err(rule("required", "File type is required"))
    }
}

fn uuid_rule(value: &str, message: &'static str) -> Result<(), ValidationError> {
    Uuid::parse_str(value.trim())
        .map(|_| ())
        .map_err(|_| rule("uuid", message))
}

/// Adds a failure for a non-negative integer field outside `0..=u32::MAX`
pub fn check_u32(errors: &mut ValidationErrors, field: &'static str, value: i64, message: &'static str) {
    if u32::try_from(value).is_err() {
        errors.add(field, rule("range", message));
    }
}

/// Runs the derived rules, lets `extra` add hand-written ones, and maps any
/// failure to a 400 envelope
pub fn validate_with<T, F>(value: &T, extra: F) -> Result<(), ApiError>
where
    T: Validate,
    F: FnOnce(&mut ValidationErrors),
{
    let mut errors = value.validate().err().unwrap_or_else(ValidationErrors::new);
    extra(&mut errors);

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors.into())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::validation(field_errors(&errors))
    }
}

/// Flattens `validator` output into envelope entries sorted by field
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, failures)| {
            let name = camel_case(field);
            failures.iter().map(move |failure| {
                let message = failure
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", name));
                FieldError::new(name.clone(), message)
            })
        })
        .collect();

    fields.sort_by(|a, b| a.field.cmp(&b.field));
    fields
}

/// `watch_time` -> `watchTime`, matching the JSON field names
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
