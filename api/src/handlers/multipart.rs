//! Buffered multipart form parsing for the upload endpoints.

use actix_multipart::Multipart;
use futures_util::TryStreamExt;
use std::collections::HashMap;

use super::error::ApiError;

/// A multipart body read fully into memory
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    files: HashMap<String, Vec<u8>>,
}

impl MultipartForm {
    /// Reads every part of `payload`, rejecting bodies larger than `max_size` bytes
    ///
    /// Parts carrying a filename are kept as files; the rest are decoded as
    /// UTF-8 text fields.
    pub async fn read(mut payload: Multipart, max_size: usize) -> Result<Self, ApiError> {
        let mut form = MultipartForm::default();
        let mut total = 0usize;

        while let Some(mut field) = payload.try_next().await.map_err(invalid_payload)? {
            let disposition = field.content_disposition();
            let name = match disposition.get_name() {
                Some(name) => name.to_string(),
                None => continue,
            };
            let is_file = disposition.get_filename().is_some();

            let mut bytes = Vec::new();
            while let Some(chunk) = field.try_next().await.map_err(invalid_payload)? {
                total += chunk.len();
                if total > max_size {
                    return Err(ApiError::PayloadTooLarge(format!(
                        "Upload exceeds the {} byte limit",
                        max_size
                    )));
                }
                bytes.extend_from_slice(&chunk);
            }

            if is_file {
                form.files.insert(name, bytes);
            } else {
                let value = String::from_utf8(bytes)
                    .map_err(|_| ApiError::bad_request(format!("Field '{}' is not valid UTF-8", name)))?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    /// Text field value, if sent
    pub fn text(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }

    /// Text field value or an empty string
    pub fn text_or_default(&self, name: &str) -> String {
        self.text(name).unwrap_or_default()
    }

    /// Integer field, `0` when missing or unparsable
    pub fn int_or_zero(&self, name: &str) -> i64 {
        self.fields
            .get(name)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Removes and returns a non-empty file part
    pub fn take_file(&mut self, name: &str) -> Option<Vec<u8>> {
        self.files.remove(name).filter(|bytes| !bytes.is_empty())
    }

    #[cfg(test)]
    pub(crate) fn from_parts(fields: &[(&str, &str)], files: &[(&str, &[u8])]) -> Self {
        Self {
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            files: files.iter().map(|(k, v)| (k.to_string(), v.to_vec())).collect(),
        }
    }
}

fn invalid_payload(error: actix_multipart::MultipartError) -> ApiError {
    log::debug!("Rejected multipart payload: {}", error);
    ApiError::bad_request("Invalid multipart payload")
}
