//! Type definitions shared by the API and its clients
//!
//! - `response` - the `{success, message, data, errors}` envelope

pub mod response;

pub use response::{ApiResponse, FieldError};
