//! Section entity grouping lessons inside a course.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: Uuid,

    pub course_id: Uuid,

    pub title: String,

    /// Caller-supplied display order; duplicates are accepted
    pub order: u32,

    /// Ordered lesson ids
    #[serde(rename = "lessons")]
    pub lesson_ids: Vec<Uuid>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Section {
    pub fn new(course_id: Uuid, title: String, order: u32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            course_id,
            title,
            order,
            lesson_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn belongs_to(&self, course_id: Uuid) -> bool {
        self.course_id == course_id
    }
}
