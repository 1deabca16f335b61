//! Offline download manifest for an enrolled student.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Course, Lesson, Resource};

/// Streaming URL per quality variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoUrls {
    pub auto: String,
    pub low: String,
    pub medium: String,
    pub high: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestCourse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
}

impl From<&Course> for ManifestCourse {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id,
            title: course.title.clone(),
            description: course.description.clone(),
            thumbnail: course.thumbnail.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestLesson {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub section_id: Uuid,
    pub order: u32,
    pub duration: u32,
    pub video_url: String,
    pub video_urls: VideoUrls,
}

impl ManifestLesson {
    pub fn new(lesson: &Lesson, video_urls: VideoUrls) -> Self {
        Self {
            id: lesson.id,
            title: lesson.title.clone(),
            description: lesson.description.clone(),
            section_id: lesson.section_id,
            order: lesson.order,
            duration: lesson.duration,
            video_url: lesson.video_url.clone(),
            video_urls,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestResource {
    pub id: Uuid,
    pub title: String,
    pub file_type: String,
    pub size: u64,
    pub file_url: String,
}

impl From<&Resource> for ManifestResource {
    fn from(resource: &Resource) -> Self {
        Self {
            id: resource.id,
            title: resource.title.clone(),
            file_type: resource.file_type.clone(),
            size: resource.size,
            file_url: resource.file_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadManifest {
    pub course: ManifestCourse,
    pub lessons: Vec<ManifestLesson>,
    pub resources: Vec<ManifestResource>,
}
