//! Grade mapping and CGPA aggregation.
//!
//! This module maps a course total onto the institution's grade brackets,
//! reduces the per-course grade points into a credit-weighted CGPA, and
//! assembles the score card used by the display and export surfaces.

pub mod aggregate;
pub mod grade;
pub mod types;
pub mod utility;

pub use aggregate::{compute_cgpa, score_card};
pub use grade::{Grade, PASS_MARK, grade_label, grade_point, passed};
pub use types::{CourseRow, ScoreCard};
