//! Course catalog route handlers
//!
//! Public:
//! - `GET /api/courses?search=...`
//! - `GET /api/courses/{id}`
//!
//! Instructor only (ownership is checked by the course service):
//! - `POST   /api/courses` (multipart: title, description, thumbnail)
//! - `GET    /api/courses/instructor/my-courses`
//! - `PUT    /api/courses/{id}` (multipart)
//! - `DELETE /api/courses/{id}`
//! - `PUT    /api/courses/{id}/publish`
//! - `POST   /api/courses/{id}/sections` (JSON)
//! - `POST   /api/courses/{id}/lessons` (multipart incl. `video`)
//! - `POST   /api/courses/{id}/resources` (multipart incl. `file`)

pub mod authoring;
pub mod catalog;
pub mod content;

pub use authoring::{create_course, delete_course, instructor_courses, publish_course, update_course};
pub use catalog::{get_course, list_courses};
pub use content::{add_lesson, add_resource, add_section};
