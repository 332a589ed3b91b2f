use chrono::Utc;

use crate::catalog::{APP_TITLE, Catalog, PROGRAM};
use crate::grading::grade::{Grade, passed};
use crate::grading::types::{CourseRow, ScoreCard};
use crate::grading::utility::{format_hundredths, weighted_mean_hundredths};
use crate::marks::MarkStore;

/// Credit-weighted mean grade point across the catalog, formatted with two
/// fractional digits.
///
/// Unset marks count as zero. An empty catalog yields `"0.00"`.
pub fn compute_cgpa(catalog: &Catalog, marks: &MarkStore) -> String {
    let hundredths = weighted_mean_hundredths(catalog.courses().iter().map(|course| {
        let point = Grade::from_total(marks.total(&course.code)).point();
        (u64::from(point), u64::from(course.credits))
    }));

    format_hundredths(hundredths)
}

/// Builds the per-course rows plus the aggregate for display or export.
pub fn score_card(catalog: &Catalog, marks: &MarkStore) -> ScoreCard {
    let courses = catalog
        .courses()
        .iter()
        .map(|course| {
            let entry = marks.entry(&course.code).copied().unwrap_or_default();
            let total = entry.total();
            let grade = Grade::from_total(total);

            CourseRow {
                code: course.code.clone(),
                title: course.title.clone(),
                credits: course.credits,
                internal: entry.internal,
                external: entry.external,
                total,
                grade,
                grade_point: grade.point(),
                passed: passed(total),
            }
        })
        .collect();

    ScoreCard {
        title: APP_TITLE.to_string(),
        program: PROGRAM.to_string(),
        generated_at: Utc::now(),
        courses,
        total_credits: catalog.total_credits(),
        cgpa: compute_cgpa(catalog, marks),
    }
}
