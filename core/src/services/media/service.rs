//! Media service implementation

use std::sync::Arc;

use crate::domain::value_objects::VideoUrls;
use crate::errors::{DomainError, DomainResult};

use super::gateway::{MediaGateway, MediaKind, StreamQuality, UploadedMedia};

/// Uploads and deletes course media under a fixed root folder
pub struct MediaService {
    gateway: Arc<dyn MediaGateway>,
    root_folder: String,
}

impl MediaService {
    pub fn new(gateway: Arc<dyn MediaGateway>, root_folder: impl Into<String>) -> Self {
        Self {
            gateway,
            root_folder: root_folder.into(),
        }
    }

    pub async fn upload_image(&self, bytes: Vec<u8>, name: &str, folder: &str) -> DomainResult<UploadedMedia> {
        self.upload(MediaKind::Image, bytes, name, folder, "Image upload failed")
            .await
    }

    /// Uploads a video; the result carries the host-detected duration if any
    pub async fn upload_video(&self, bytes: Vec<u8>, name: &str, folder: &str) -> DomainResult<UploadedMedia> {
        self.upload(MediaKind::Video, bytes, name, folder, "Video upload failed")
            .await
    }

    pub async fn upload_file(&self, bytes: Vec<u8>, name: &str, folder: &str) -> DomainResult<UploadedMedia> {
        self.upload(MediaKind::Raw, bytes, name, folder, "File upload failed")
            .await
    }

    pub async fn delete_media(&self, content_id: &str, kind: MediaKind) -> DomainResult<()> {
        self.gateway
            .delete(content_id, kind)
            .await
            .map_err(|e| wrap_upstream(e, "Media deletion failed"))
    }

    pub fn video_streaming_url(&self, content_id: &str, quality: StreamQuality) -> String {
        self.gateway.streaming_url(content_id, quality)
    }

    /// Streaming URL for every quality variant
    pub fn video_urls(&self, content_id: &str) -> VideoUrls {
        VideoUrls {
            auto: self.video_streaming_url(content_id, StreamQuality::Auto),
            low: self.video_streaming_url(content_id, StreamQuality::Low),
            medium: self.video_streaming_url(content_id, StreamQuality::Medium),
            high: self.video_streaming_url(content_id, StreamQuality::High),
        }
    }

    async fn upload(
        &self,
        kind: MediaKind,
        bytes: Vec<u8>,
        name: &str,
        folder: &str,
        failure: &str,
    ) -> DomainResult<UploadedMedia> {
        let folder = format!("{}/{}", self.root_folder, folder);
        let size = bytes.len();

        let uploaded = self
            .gateway
            .upload(kind, bytes, name, &folder)
            .await
            .map_err(|e| {
                tracing::error!(kind = %kind, folder = %folder, error = %e, "Media upload failed");
                wrap_upstream(e, failure)
            })?;

        tracing::info!(kind = %kind, content_id = %uploaded.content_id, size, "Media uploaded");
        Ok(uploaded)
    }
}

fn wrap_upstream(error: DomainError, prefix: &str) -> DomainError {
    match error {
        DomainError::Upstream { message } => DomainError::upstream(format!("{}: {}", prefix, message)),
        other => other,
    }
}
