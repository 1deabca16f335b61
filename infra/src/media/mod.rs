//! Media hosting module
//!
//! Cloudinary implementation of the `MediaGateway` trait from `es_core`.

pub mod cloudinary;

pub use cloudinary::CloudinaryGateway;
