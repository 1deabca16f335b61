//! Offline download manifest module

mod service;

#[cfg(test)]
mod tests;

pub use service::ManifestService;
