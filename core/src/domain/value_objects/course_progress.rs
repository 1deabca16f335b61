//! Completion summary for one student in one course.

use serde::{Deserialize, Serialize};

use crate::domain::entities::progress::Progress;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CourseProgress {
    /// Progress rows marked completed
    pub completed: u32,

    /// Progress rows reported so far (not the number of lessons in the course)
    pub total: u32,

    /// `round(100 * completed / total)`, 0 when nothing was reported
    pub percentage: u32,
}

impl CourseProgress {
    pub fn new(completed: u32, total: u32) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            (f64::from(completed) * 100.0 / f64::from(total)).round() as u32
        };
        Self {
            completed,
            total,
            percentage,
        }
    }

    /// Aggregates the rows of a single (user, course) pair
    pub fn from_records(records: &[Progress]) -> Self {
        let completed = records.iter().filter(|p| p.completed).count() as u32;
        Self::new(completed, records.len() as u32)
    }
}
