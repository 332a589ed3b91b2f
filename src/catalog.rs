//! Static course catalog for one academic term.

use serde::Serialize;

/// Heading shown on the display and on exported score cards.
pub const APP_TITLE: &str = "CGPA Calculator";

/// Program and term the default catalog belongs to.
pub const PROGRAM: &str = "MBA (Business Analytics) Semester - 1";

static DEFAULT_COURSES: &[(&str, &str, u32)] = &[
    ("OBA1101", "Management Concepts and Organization Behavior", 3),
    ("OBA1102", "Managerial Economics", 3),
    ("OBA1103", "Human Resource Management", 3),
    ("OBA1104", "Marketing Management", 3),
    ("OBA1105", "Financial Management", 3),
    ("OBA1106", "Operations Management", 3),
    ("OBA1107", "Statistical Methods for Decision Making", 3),
    ("OBA1108", "R Programming", 3),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    pub code: String,
    pub title: String,
    pub credits: u32,
}

impl Course {
    pub fn new(code: &str, title: &str, credits: u32) -> Self {
        Self {
            code: code.to_string(),
            title: title.to_string(),
            credits,
        }
    }
}

/// Ordered, read-only list of courses.
///
/// Built once at start-up and handed out by reference; nothing mutates it
/// afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Codes must be unique and credits positive; a duplicate code would be
    /// weighted twice in the CGPA but share one mark entry.
    pub fn new(courses: Vec<Course>) -> Self {
        debug_assert!(
            courses.iter().all(|c| c.credits > 0),
            "course credits must be positive"
        );
        debug_assert!(
            courses
                .iter()
                .enumerate()
                .all(|(i, c)| courses[..i].iter().all(|prev| prev.code != c.code)),
            "course codes must be unique"
        );
        Self { courses }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Looks up a course by its code.
    pub fn get(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.code == code)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn total_credits(&self) -> u32 {
        self.courses.iter().map(|c| c.credits).sum()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(
            DEFAULT_COURSES
                .iter()
                .map(|&(code, title, credits)| Course::new(code, title, credits))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_catalog_has_eight_courses() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.total_credits(), 24);
    }

    #[test]
    fn test_default_codes_are_unique_and_ordered() {
        let catalog = Catalog::default();
        let codes: Vec<_> = catalog.courses().iter().map(|c| c.code.as_str()).collect();
        let unique: HashSet<_> = codes.iter().collect();

        assert_eq!(unique.len(), codes.len());
        assert_eq!(codes.first(), Some(&"OBA1101"));
        assert_eq!(codes.last(), Some(&"OBA1108"));
    }

    #[test]
    fn test_credits_are_positive() {
        assert!(Catalog::default().courses().iter().all(|c| c.credits > 0));
    }

    #[test]
    fn test_get_by_code() {
        let catalog = Catalog::default();
        assert_eq!(catalog.get("OBA1108").unwrap().title, "R Programming");
        assert!(catalog.get("CS101").is_none());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "course codes must be unique")]
    fn test_duplicate_codes_rejected() {
        Catalog::new(vec![Course::new("X1", "One", 3), Course::new("X1", "Again", 3)]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "course credits must be positive")]
    fn test_zero_credits_rejected() {
        Catalog::new(vec![Course::new("X1", "One", 0)]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(vec![]);
        assert!(catalog.is_empty());
        assert_eq!(catalog.total_credits(), 0);
    }
}
