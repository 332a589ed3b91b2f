//! Data types produced by the aggregation pipeline.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::grading::grade::Grade;

/// Derived result for a single course, as displayed and exported.
#[derive(Debug, Clone, Serialize)]
pub struct CourseRow {
    pub code: String,
    pub title: String,
    pub credits: u32,
    pub internal: Option<u8>,
    pub external: Option<u8>,
    pub total: i32,
    pub grade: Grade,
    pub grade_point: u8,
    pub passed: bool,
}

/// Complete score card for the current marks.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreCard {
    pub title: String,
    pub program: String,
    pub generated_at: DateTime<Utc>,
    pub courses: Vec<CourseRow>,
    pub total_credits: u32,
    pub cgpa: String,
}

impl ScoreCard {
    pub fn passed_count(&self) -> usize {
        self.courses.iter().filter(|c| c.passed).count()
    }
}
