//! Cloudinary media gateway
//!
//! Uploads go through the signed upload API as multipart forms; deletions use
//! the signed destroy endpoint. Streaming URLs are built locally from the
//! delivery base URL and never hit the network.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha1::{Digest, Sha1};

use es_core::errors::{DomainError, DomainResult};
use es_core::services::media::{MediaGateway, MediaKind, StreamQuality, UploadedMedia};
use es_shared::config::MediaConfig;

use crate::InfrastructureError;

/// Successful upload response; only the fields we keep
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
    /// Seconds, present for video uploads
    #[serde(default)]
    duration: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

pub struct CloudinaryGateway {
    client: reqwest::Client,
    config: MediaConfig,
}

impl CloudinaryGateway {
    pub fn new(config: MediaConfig) -> Result<Self, InfrastructureError> {
        if !config.is_configured() {
            return Err(InfrastructureError::Config(
                "Cloudinary credentials are not configured".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { client, config })
    }

    fn endpoint(&self, kind: MediaKind, action: &str) -> String {
        format!(
            "{}/v1_1/{}/{}/{}",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.cloud_name,
            kind.as_str(),
            action
        )
    }

    /// Signed form fields shared by upload and destroy
    fn signed_params(&self, mut params: Vec<(&'static str, String)>) -> Vec<(&'static str, String)> {
        params.push(("timestamp", Utc::now().timestamp().to_string()));
        let signature = sign(&params, &self.config.api_secret);
        params.push(("api_key", self.config.api_key.clone()));
        params.push(("signature", signature));
        params
    }

    async fn read_error(response: reqwest::Response) -> String {
        let status = response.status();
        match response.json::<ErrorResponse>().await {
            Ok(body) => body.error.message,
            Err(_) => format!("media host responded with {}", status),
        }
    }
}

/// SHA-1 hex of the alphabetically sorted `key=value` pairs joined with `&`,
/// followed by the API secret
pub fn sign(params: &[(&str, String)], api_secret: &str) -> String {
    let mut sorted: Vec<&(&str, String)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let payload = sorted
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha1::new();
    hasher.update(payload.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Delivery transformation for a quality variant
pub fn quality_transformation(quality: StreamQuality) -> &'static str {
    match quality {
        StreamQuality::Auto => "q_auto",
        StreamQuality::Low => "q_auto:low",
        StreamQuality::Medium => "q_auto:good",
        StreamQuality::High => "q_auto:best",
    }
}

pub fn streaming_url(delivery_base_url: &str, cloud_name: &str, public_id: &str, quality: StreamQuality) -> String {
    format!(
        "{}/{}/video/upload/{},f_auto/{}",
        delivery_base_url.trim_end_matches('/'),
        cloud_name,
        quality_transformation(quality),
        public_id
    )
}

#[async_trait]
impl MediaGateway for CloudinaryGateway {
    async fn upload(
        &self,
        kind: MediaKind,
        bytes: Vec<u8>,
        name: &str,
        folder: &str,
    ) -> DomainResult<UploadedMedia> {
        let params = self.signed_params(vec![
            ("folder", folder.to_string()),
            ("overwrite", "true".to_string()),
            ("public_id", name.to_string()),
        ]);

        let mut form = Form::new().part("file", Part::bytes(bytes).file_name(name.to_string()));
        for (key, value) in params {
            form = form.text(key, value);
        }

        tracing::debug!(kind = %kind, folder, name, "Uploading to media host");
        let response = self
            .client
            .post(self.endpoint(kind, "upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(kind = %kind, error = %e, "Media upload request failed");
                DomainError::upstream(e.to_string())
            })?;

        if !response.status().is_success() {
            let message = Self::read_error(response).await;
            tracing::error!(kind = %kind, %message, "Media host rejected upload");
            return Err(DomainError::upstream(message));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| DomainError::upstream(format!("Malformed upload response: {}", e)))?;

        Ok(UploadedMedia {
            url: body.secure_url,
            content_id: body.public_id,
            duration: body.duration.map(|d| d.round() as u32),
        })
    }

    async fn delete(&self, content_id: &str, kind: MediaKind) -> DomainResult<()> {
        let params = self.signed_params(vec![("public_id", content_id.to_string())]);

        let response = self
            .client
            .post(self.endpoint(kind, "destroy"))
            .form(&params)
            .send()
            .await
            .map_err(|e| DomainError::upstream(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DomainError::upstream(Self::read_error(response).await));
        }

        let body: DestroyResponse = response
            .json()
            .await
            .map_err(|e| DomainError::upstream(format!("Malformed destroy response: {}", e)))?;
        if body.result != "ok" {
            tracing::warn!(content_id, kind = %kind, result = %body.result, "Media host did not delete asset");
        }
        Ok(())
    }

    fn streaming_url(&self, content_id: &str, quality: StreamQuality) -> String {
        streaming_url(&self.config.delivery_base_url, &self.config.cloud_name, content_id, quality)
    }
}
