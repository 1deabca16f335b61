//! Course authoring inputs: multipart forms for course/lesson/resource
//! uploads and the JSON section body.

use es_core::services::course::{
    CreateCourseInput, NewLessonInput, NewResourceInput, NewSectionInput, UpdateCourseInput,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use super::validation::{
    check_u32, validate_description, validate_file_type, validate_section_id,
    validate_section_title, validate_title, validate_with,
};
use crate::handlers::{ApiError, MultipartForm};

const ORDER_MESSAGE: &str = "Order must be a non-negative integer";
const DURATION_MESSAGE: &str = "Duration must be a non-negative integer";

/// `GET /api/courses?search=...`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseSearchQuery {
    pub search: Option<String>,
}

#[derive(Debug, Clone, Validate)]
pub struct CreateCourseForm {
    #[validate(custom = "validate_title")]
    pub title: String,
    #[validate(custom = "validate_description")]
    pub description: String,
}

impl CreateCourseForm {
    pub fn from_form(form: &MultipartForm) -> Self {
        Self {
            title: form.text_or_default("title"),
            description: form.text_or_default("description"),
        }
    }

    pub fn into_input(self) -> Result<CreateCourseInput, ApiError> {
        validate_with(&self, |_| {})?;
        Ok(CreateCourseInput {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
        })
    }
}

/// Partial update; absent fields are left untouched
#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateCourseForm {
    #[validate(custom = "validate_title")]
    pub title: Option<String>,
    #[validate(custom = "validate_description")]
    pub description: Option<String>,
}

impl UpdateCourseForm {
    pub fn from_form(form: &MultipartForm) -> Self {
        Self {
            title: form.text("title"),
            description: form.text("description"),
        }
    }

    pub fn into_input(self) -> Result<UpdateCourseInput, ApiError> {
        validate_with(&self, |_| {})?;
        Ok(UpdateCourseInput {
            title: self.title.map(|t| t.trim().to_string()),
            description: self.description.map(|d| d.trim().to_string()),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateSectionRequest {
    #[validate(custom = "validate_section_title")]
    pub title: String,
    pub order: i64,
}

impl CreateSectionRequest {
    pub fn into_input(self) -> Result<NewSectionInput, ApiError> {
        validate_with(&self, |errors| check_u32(errors, "order", self.order, ORDER_MESSAGE))?;
        Ok(NewSectionInput {
            title: self.title.trim().to_string(),
            order: self.order as u32,
        })
    }
}

/// Text fields of `POST /api/courses/{id}/lessons`; the video travels as
/// the `video` file part
#[derive(Debug, Clone, Validate)]
pub struct LessonForm {
    #[validate(custom = "validate_section_id")]
    pub section_id: String,
    #[validate(custom = "validate_title")]
    pub title: String,
    #[validate(custom = "validate_description")]
    pub description: String,
    pub duration: i64,
    pub order: i64,
}

impl LessonForm {
    pub fn from_form(form: &MultipartForm) -> Self {
        Self {
            section_id: form.text_or_default("sectionId"),
            title: form.text_or_default("title"),
            description: form.text_or_default("description"),
            duration: form.int_or_zero("duration"),
            order: form.int_or_zero("order"),
        }
    }

    pub fn into_input(self) -> Result<NewLessonInput, ApiError> {
        validate_with(&self, |errors| {
            check_u32(errors, "duration", self.duration, DURATION_MESSAGE);
            check_u32(errors, "order", self.order, ORDER_MESSAGE);
        })?;

        let section_id = Uuid::parse_str(self.section_id.trim())
            .map_err(|_| ApiError::bad_request("Invalid ID format"))?;

        Ok(NewLessonInput {
            section_id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            duration: self.duration as u32,
            order: self.order as u32,
        })
    }
}

#[derive(Debug, Clone, Validate)]
pub struct ResourceForm {
    #[validate(custom = "validate_title")]
    pub title: String,
    #[validate(custom = "validate_file_type")]
    pub file_type: String,
}

impl ResourceForm {
    pub fn from_form(form: &MultipartForm) -> Self {
        Self {
            title: form.text_or_default("title"),
            file_type: form.text_or_default("fileType"),
        }
    }

    pub fn into_input(self) -> Result<NewResourceInput, ApiError> {
        validate_with(&self, |_| {})?;
        Ok(NewResourceInput {
            title: self.title.trim().to_string(),
            file_type: self.file_type.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(err: ApiError) -> Vec<(String, String)> {
        match err {
            ApiError::Validation { errors, .. } => {
                errors.into_iter().map(|e| (e.field, e.message)).collect()
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_course_form_requires_title_and_description() {
        let form = MultipartForm::from_parts(&[("title", "Go")], &[]);
        let errors = fields(CreateCourseForm::from_form(&form).into_input().unwrap_err());

        assert_eq!(
            errors,
            vec![
                ("description".to_string(), "Description must be at least 10 characters".to_string()),
                ("title".to_string(), "Title must be at least 3 characters".to_string()),
            ]
        );
    }

    #[test]
    fn test_update_form_only_checks_present_fields() {
        let form = MultipartForm::from_parts(&[("title", "Rust 101")], &[]);
        let input = UpdateCourseForm::from_form(&form).into_input().unwrap();
        assert_eq!(input.title.as_deref(), Some("Rust 101"));
        assert!(input.description.is_none());
    }

    #[test]
    fn test_negative_section_order_is_rejected() {
        let request = CreateSectionRequest {
            title: "Basics".to_string(),
            order: -1,
        };
        let errors = fields(request.into_input().unwrap_err());
        assert_eq!(errors[0].0, "order");
    }

    #[test]
    fn test_lesson_form_parses_numbers_leniently() {
        let section = Uuid::new_v4().to_string();
        let form = MultipartForm::from_parts(
            &[
                ("sectionId", section.as_str()),
                ("title", "Ownership"),
                ("description", "Moves, borrows and lifetimes"),
                ("duration", "n/a"),
                ("order", "3"),
            ],
            &[],
        );
        let input = LessonForm::from_form(&form).into_input().unwrap();

        assert_eq!(input.duration, 0);
        assert_eq!(input.order, 3);
        assert_eq!(input.section_id.to_string(), section);
    }

    #[test]
    fn test_lesson_form_requires_section_id() {
        let form = MultipartForm::from_parts(
            &[("title", "Ownership"), ("description", "Moves, borrows and lifetimes")],
            &[],
        );
        let errors = fields(LessonForm::from_form(&form).into_input().unwrap_err());
        assert_eq!(errors, vec![("sectionId".to_string(), "Section ID is required".to_string())]);
    }
}
