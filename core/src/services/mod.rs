//! Business services containing domain logic and use cases.

pub mod auth;
pub mod course;
pub mod enrollment;
pub mod manifest;
pub mod media;
pub mod progress;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, RegisterInput};
pub use course::{
    CourseService, CreateCourseInput, NewLessonInput, NewResourceInput, NewSectionInput,
    UpdateCourseInput,
};
pub use enrollment::EnrollmentService;
pub use manifest::ManifestService;
pub use media::{MediaGateway, MediaKind, MediaService, MockMediaGateway, StreamQuality, UploadedMedia};
pub use progress::{ProgressService, UpdateProgressInput};
pub use token::{TokenService, TokenServiceConfig};
