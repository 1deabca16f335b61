//! Per (student, lesson) watch state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub id: Uuid,

    pub user_id: Uuid,

    /// Copied from the lesson so course aggregates need no join
    pub course_id: Uuid,

    pub lesson_id: Uuid,

    pub completed: bool,

    /// Watched seconds
    pub watch_time: u32,

    pub last_watched: DateTime<Utc>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Progress {
    pub fn new(
        user_id: Uuid,
        lesson_id: Uuid,
        course_id: Uuid,
        watch_time: u32,
        completed: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            course_id,
            lesson_id,
            completed,
            watch_time,
            last_watched: now,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites the watch state and stamps `last_watched`
    pub fn record(&mut self, watch_time: u32, completed: bool) {
        let now = Utc::now();
        self.watch_time = watch_time;
        self.completed = completed;
        self.last_watched = now;
        self.updated_at = now;
    }
}
