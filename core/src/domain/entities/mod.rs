//! Domain entities representing core business objects.

pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod progress;
pub mod resource;
pub mod section;
pub mod token;
pub mod user;

use uuid::Uuid;

// Re-export commonly used types
pub use course::Course;
pub use enrollment::Enrollment;
pub use lesson::{Lesson, NewLesson};
pub use progress::Progress;
pub use resource::Resource;
pub use section::Section;
pub use token::{Claims, DEFAULT_TOKEN_EXPIRY_SECONDS, JWT_ISSUER};
pub use user::{Profile, User, UserRole};

/// Any persisted record addressed by a UUID primary key
pub trait Entity: Clone + Send + Sync + 'static {
    /// Primary key
    fn id(&self) -> Uuid;
}

macro_rules! impl_entity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Entity for $ty {
                fn id(&self) -> Uuid {
                    self.id
                }
            }
        )+
    };
}

impl_entity!(User, Course, Section, Lesson, Resource, Enrollment, Progress);
