//! Course catalog service module
//!
//! Authoring (create, update, publish, delete with cascade), the
//! section/lesson/resource hierarchy and the public catalog queries.

mod input;
mod service;

#[cfg(test)]
mod tests;

pub use input::{CreateCourseInput, NewLessonInput, NewResourceInput, NewSectionInput, UpdateCourseInput};
pub use service::CourseService;
