//! Request bodies and forms accepted by the HTTP surface.

pub mod auth_dto;
pub mod course_dto;
pub mod progress_dto;
pub mod validation;

pub use auth_dto::{LoginRequest, RegisterRequest};
pub use course_dto::{
    CourseSearchQuery, CreateCourseForm, CreateSectionRequest, LessonForm, ResourceForm,
    UpdateCourseForm,
};
pub use progress_dto::UpdateProgressRequest;
