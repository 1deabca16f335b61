//! Course entity: the root of the section/lesson/resource hierarchy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Course authored by an instructor
///
/// A course starts as a draft (`published == false`) and can only move to
/// published; there is no way back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Uuid,

    pub title: String,

    pub description: String,

    /// Thumbnail URL, empty when none was uploaded
    pub thumbnail: String,

    /// Media host id of the thumbnail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_id: Option<String>,

    pub instructor_id: Uuid,

    pub published: bool,

    /// Ordered section ids
    #[serde(rename = "sections")]
    pub section_ids: Vec<Uuid>,

    /// Resource ids
    #[serde(rename = "resources")]
    pub resource_ids: Vec<Uuid>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// Creates a new draft course
    pub fn new(instructor_id: Uuid, title: String, description: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            thumbnail: String::new(),
            thumbnail_id: None,
            instructor_id,
            published: false,
            section_ids: Vec::new(),
            resource_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `user_id` authored this course
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.instructor_id == user_id
    }

    pub fn set_thumbnail(&mut self, url: String, content_id: String) {
        self.thumbnail = url;
        self.thumbnail_id = Some(content_id);
        self.updated_at = Utc::now();
    }

    /// Applies a partial update of the editable text fields
    pub fn apply_update(&mut self, title: Option<String>, description: Option<String>) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        self.updated_at = Utc::now();
    }

    pub fn publish(&mut self) {
        self.published = true;
        self.updated_at = Utc::now();
    }

    /// Case-insensitive whole-word match of any term against title + description
    ///
    /// Mirrors the FULLTEXT natural-language search of the MySQL store, which
    /// also matches whole words only.
    pub fn matches_search(&self, query: &str) -> bool {
        let haystack = format!("{} {}", self.title, self.description).to_lowercase();
        let words: Vec<&str> = haystack
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .collect();

        let terms: Vec<String> = query
            .split(|c: char| !c.is_alphanumeric())
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
            .collect();
        if terms.is_empty() {
            return true;
        }
        terms.iter().any(|term| words.contains(&term.as_str()))
    }
}
