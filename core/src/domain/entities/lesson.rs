//! Lesson entity: a single video inside a section.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: Uuid,

    pub section_id: Uuid,

    /// Always equal to the parent section's course id
    pub course_id: Uuid,

    pub title: String,

    pub description: String,

    pub video_url: String,

    /// Media host id of the video
    pub video_id: String,

    /// Duration in seconds
    pub duration: u32,

    pub order: u32,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Fields needed to create a lesson once its video is uploaded
#[derive(Debug, Clone)]
pub struct NewLesson {
    pub section_id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub video_id: String,
    pub duration: u32,
    pub order: u32,
}

impl Lesson {
    pub fn new(new: NewLesson) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            section_id: new.section_id,
            course_id: new.course_id,
            title: new.title,
            description: new.description,
            video_url: new.video_url,
            video_id: new.video_id,
            duration: new.duration,
            order: new.order,
            created_at: now,
            updated_at: now,
        }
    }
}
