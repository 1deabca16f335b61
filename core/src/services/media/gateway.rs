//! Media host abstraction

use async_trait::async_trait;

use crate::errors::DomainResult;

/// Asset category; deletion must use the kind the asset was uploaded with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
    /// Arbitrary files (PDFs, archives)
    Raw,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Raw => "raw",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Video delivery quality variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamQuality {
    Auto,
    Low,
    Medium,
    High,
}

impl StreamQuality {
    pub const ALL: [StreamQuality; 4] = [
        StreamQuality::Auto,
        StreamQuality::Low,
        StreamQuality::Medium,
        StreamQuality::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StreamQuality::Auto => "auto",
            StreamQuality::Low => "low",
            StreamQuality::Medium => "medium",
            StreamQuality::High => "high",
        }
    }
}

/// Reference to an uploaded asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedMedia {
    /// Public delivery URL
    pub url: String,
    /// Host-side content id used for deletion and URL generation
    pub content_id: String,
    /// Duration in seconds, when the host detected one (videos only)
    pub duration: Option<u32>,
}

/// Remote media host
///
/// Implementations fail with `DomainError::Upstream` carrying the host's
/// message. `folder` is the full path including the root folder.
#[async_trait]
pub trait MediaGateway: Send + Sync {
    /// Upload `bytes` as `folder/name`, overwriting an existing asset
    async fn upload(
        &self,
        kind: MediaKind,
        bytes: Vec<u8>,
        name: &str,
        folder: &str,
    ) -> DomainResult<UploadedMedia>;

    async fn delete(&self, content_id: &str, kind: MediaKind) -> DomainResult<()>;

    /// Delivery URL of a video transcoded for `quality`
    fn streaming_url(&self, content_id: &str, quality: StreamQuality) -> String;
}
