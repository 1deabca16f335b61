//! Request-level helpers shared by every route: error mapping and multipart parsing.

pub mod error;
pub mod multipart;

pub use error::{json_error_handler, not_found, path_error_handler, query_error_handler, ApiError};
pub use multipart::MultipartForm;
