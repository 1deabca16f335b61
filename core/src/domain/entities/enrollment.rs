//! Enrollment: the unique (student, course) relation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: Uuid,

    pub user_id: Uuid,

    pub course_id: Uuid,

    pub enrolled_at: DateTime<Utc>,
}

impl Enrollment {
    pub fn new(user_id: Uuid, course_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            course_id,
            enrolled_at: Utc::now(),
        }
    }

    pub fn matches(&self, user_id: Uuid, course_id: Uuid) -> bool {
        self.user_id == user_id && self.course_id == course_id
    }
}
