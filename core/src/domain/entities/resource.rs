//! Downloadable course resource (slides, PDFs, archives).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: Uuid,

    pub course_id: Uuid,

    pub title: String,

    pub file_url: String,

    /// Media host id of the file
    pub file_id: String,

    /// Client-declared type, e.g. `pdf`
    pub file_type: String,

    /// Size in bytes
    pub size: u64,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Resource {
    pub fn new(
        course_id: Uuid,
        title: String,
        file_type: String,
        size: u64,
        file_url: String,
        file_id: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            course_id,
            title,
            file_url,
            file_id,
            file_type,
            size,
            created_at: now,
            updated_at: now,
        }
    }
}
