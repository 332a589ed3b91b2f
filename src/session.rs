//! One editing session over the catalog.
//!
//! Every write goes through [`Session::set_mark`], which recomputes the CGPA
//! before returning, so [`Session::cgpa`] is never stale.

use tracing::debug;

use crate::catalog::Catalog;
use crate::grading::{ScoreCard, compute_cgpa, score_card};
use crate::marks::{Field, MarkStore};

pub struct Session<'a> {
    catalog: &'a Catalog,
    marks: MarkStore,
    cgpa: String,
}

impl<'a> Session<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        let marks = MarkStore::new(catalog);
        let cgpa = compute_cgpa(catalog, &marks);
        Self {
            catalog,
            marks,
            cgpa,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    pub fn marks(&self) -> &MarkStore {
        &self.marks
    }

    pub fn cgpa(&self) -> &str {
        &self.cgpa
    }

    /// Stores a mark and returns the recomputed CGPA.
    pub fn set_mark(&mut self, code: &str, field: Field, raw: &str) -> &str {
        self.marks.set_mark(code, field, raw);
        self.recompute()
    }

    /// Unsets every mark and returns the recomputed CGPA.
    pub fn reset(&mut self) -> &str {
        self.marks.clear();
        self.recompute()
    }

    pub fn score_card(&self) -> ScoreCard {
        score_card(self.catalog, &self.marks)
    }

    fn recompute(&mut self) -> &str {
        self.cgpa = compute_cgpa(self.catalog, &self.marks);
        debug!(cgpa = %self.cgpa, "CGPA recomputed");
        &self.cgpa
    }
}
