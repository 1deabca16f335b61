//! Inputs accepted by the course service

use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateCourseInput {
    pub title: String,
    pub description: String,
}

/// Partial update; `None` leaves the field as is
#[derive(Debug, Clone, Default)]
pub struct UpdateCourseInput {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewSectionInput {
    pub title: String,
    pub order: u32,
}

#[derive(Debug, Clone)]
pub struct NewLessonInput {
    pub section_id: Uuid,
    pub title: String,
    pub description: String,
    /// Caller's duration, used when the media host reports none
    pub duration: u32,
    pub order: u32,
}

#[derive(Debug, Clone)]
pub struct NewResourceInput {
    pub title: String,
    pub file_type: String,
}
