use es_core::services::progress::UpdateProgressInput;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use super::validation::{rule, validate_lesson_id, validate_with};
use crate::handlers::ApiError;

/// `POST /api/progress`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateProgressRequest {
    #[validate(custom = "validate_lesson_id")]
    pub lesson_id: String,
    /// Seconds watched
    pub watch_time: f64,
    pub completed: bool,
}

impl UpdateProgressRequest {
    pub fn into_input(self) -> Result<UpdateProgressInput, ApiError> {
        validate_with(&self, |errors| {
            if !self.watch_time.is_finite() || self.watch_time < 0.0 {
                errors.add("watch_time", rule("range", "Watch time must be a non-negative number"));
            }
        })?;

        let lesson_id = Uuid::parse_str(self.lesson_id.trim())
            .map_err(|_| ApiError::bad_request("Invalid ID format"))?;

        Ok(UpdateProgressInput {
            lesson_id,
            watch_time: self.watch_time.round().min(u32::MAX as f64) as u32,
            completed: self.completed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_body() {
        let lesson = Uuid::new_v4();
        let body = format!(r#"{{"lessonId": "{}", "watchTime": 30.4, "completed": false}}"#, lesson);
        let request: UpdateProgressRequest = serde_json::from_str(&body).unwrap();
        let input = request.into_input().unwrap();

        assert_eq!(input.lesson_id, lesson);
        assert_eq!(input.watch_time, 30);
        assert!(!input.completed);
    }

    #[test]
    fn test_negative_watch_time_is_rejected() {
        let request = UpdateProgressRequest {
            lesson_id: Uuid::new_v4().to_string(),
            watch_time: -5.0,
            completed: true,
        };
        match request.into_input().unwrap_err() {
            ApiError::Validation { errors, .. } => assert_eq!(errors[0].field, "watchTime"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
