//! Media service module
//!
//! - `gateway` - the `MediaGateway` trait implemented by media hosts
//! - `service` - folder namespacing and error wrapping over a gateway
//! - `mock` - in-memory gateway for tests and local runs

mod gateway;
mod mock;
mod service;

pub use gateway::{MediaGateway, MediaKind, StreamQuality, UploadedMedia};
pub use mock::{MockMediaGateway, RecordedUpload};
pub use service::MediaService;
