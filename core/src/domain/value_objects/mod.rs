//! Value objects: read models assembled by the services for API responses.

pub mod auth_response;
pub mod course_details;
pub mod course_progress;
pub mod download_manifest;

// Re-export commonly used types
pub use auth_response::AuthResponse;
pub use course_details::{CourseDetails, CourseListing, EnrolledCourse, InstructorSummary, SectionDetails};
pub use course_progress::CourseProgress;
pub use download_manifest::{DownloadManifest, ManifestCourse, ManifestLesson, ManifestResource, VideoUrls};
