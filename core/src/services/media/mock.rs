//! In-memory media gateway

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::{DomainError, DomainResult};

use super::gateway::{MediaGateway, MediaKind, StreamQuality, UploadedMedia};

const BASE_URL: &str = "https://media.local";

/// One upload seen by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedUpload {
    pub kind: MediaKind,
    pub name: String,
    pub folder: String,
    pub size: usize,
}

/// Media gateway that keeps everything in memory
///
/// Records uploads and deletions, reports a fixed video duration and can be
/// switched into failure mode for uploads or deletions.
#[derive(Clone, Default)]
pub struct MockMediaGateway {
    uploads: Arc<RwLock<Vec<RecordedUpload>>>,
    deletions: Arc<RwLock<Vec<(String, MediaKind)>>>,
    video_duration: Arc<RwLock<Option<u32>>>,
    fail_uploads: Arc<AtomicBool>,
    fail_deletes: Arc<AtomicBool>,
}

impl MockMediaGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Duration reported for uploaded videos
    pub async fn set_video_duration(&self, duration: Option<u32>) {
        *self.video_duration.write().await = duration;
    }

    pub fn fail_uploads(&self, fail: bool) {
        self.fail_uploads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    pub async fn uploads(&self) -> Vec<RecordedUpload> {
        self.uploads.read().await.clone()
    }

    pub async fn deletions(&self) -> Vec<(String, MediaKind)> {
        self.deletions.read().await.clone()
    }
}

#[async_trait]
impl MediaGateway for MockMediaGateway {
    async fn upload(
        &self,
        kind: MediaKind,
        bytes: Vec<u8>,
        name: &str,
        folder: &str,
    ) -> DomainResult<UploadedMedia> {
        if self.fail_uploads.load(Ordering::SeqCst) {
            return Err(DomainError::upstream("media host unavailable"));
        }

        self.uploads.write().await.push(RecordedUpload {
            kind,
            name: name.to_string(),
            folder: folder.to_string(),
            size: bytes.len(),
        });

        let content_id = format!("{}/{}", folder, name);
        let duration = match kind {
            MediaKind::Video => *self.video_duration.read().await,
            _ => None,
        };

        Ok(UploadedMedia {
            url: format!("{}/{}/{}", BASE_URL, kind, content_id),
            content_id,
            duration,
        })
    }

    async fn delete(&self, content_id: &str, kind: MediaKind) -> DomainResult<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(DomainError::upstream("media host unavailable"));
        }
        self.deletions.write().await.push((content_id.to_string(), kind));
        Ok(())
    }

    fn streaming_url(&self, content_id: &str, quality: StreamQuality) -> String {
        format!("{}/video/{}/{}", BASE_URL, quality.as_str(), content_id)
    }
}
