//! Per-course mark entries and their single validated write path.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::Catalog;

/// One of the two assessed components of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Internal,
    External,
}

impl Field {
    /// Upper bound for a stored value of this component.
    pub fn max(self) -> u8 {
        match self {
            Field::Internal => 30,
            Field::External => 70,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Internal => "internal",
            Field::External => "external",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "internal" | "int" | "i" => Ok(Field::Internal),
            "external" | "ext" | "e" => Ok(Field::External),
            other => Err(anyhow::anyhow!(
                "unknown mark field '{other}', expected 'internal' or 'external'"
            )),
        }
    }
}

/// Marks for one course. `None` means the user has not entered a value yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MarkEntry {
    pub internal: Option<u8>,
    pub external: Option<u8>,
}

impl MarkEntry {
    pub fn get(&self, field: Field) -> Option<u8> {
        match field {
            Field::Internal => self.internal,
            Field::External => self.external,
        }
    }

    fn slot(&mut self, field: Field) -> &mut Option<u8> {
        match field {
            Field::Internal => &mut self.internal,
            Field::External => &mut self.external,
        }
    }

    /// Sum of both components with unset values counted as zero.
    pub fn total(&self) -> i32 {
        i32::from(self.internal.unwrap_or(0)) + i32::from(self.external.unwrap_or(0))
    }
}

/// Normalizes raw user input for `field`.
///
/// Empty input is unset. Anything else parses as an integer (decimals are
/// truncated, out-of-range magnitudes saturate, garbage becomes 0) and is clamped into `[0, field.max()]`.
pub fn normalize(field: Field, raw: &str) -> Option<u8> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let value = raw
        .parse::<i64>()
        .ok()
        .or_else(|| {
            raw.parse::<f64>()
                .ok()
                .filter(|v| !v.is_nan())
                .map(|v| v.trunc() as i64)
        })
        .unwrap_or(0);

    Some(value.clamp(0, i64::from(field.max())) as u8)
}

/// Marks keyed by course code, one entry per catalog course.
#[derive(Debug, Clone)]
pub struct MarkStore {
    entries: HashMap<String, MarkEntry>,
}

impl MarkStore {
    /// Creates an entry for every course in `catalog`, all unset.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            entries: catalog
                .courses()
                .iter()
                .map(|c| (c.code.clone(), MarkEntry::default()))
                .collect(),
        }
    }

    /// Writes one component of one course. Never fails: the value is
    /// normalized, and codes outside the store are ignored.
    pub fn set_mark(&mut self, code: &str, field: Field, raw: &str) {
        let Some(entry) = self.entries.get_mut(code) else {
            warn!(code, %field, "Ignoring mark for unknown course");
            return;
        };

        let value = normalize(field, raw);
        *entry.slot(field) = value;
        debug!(code, %field, raw, stored = ?value, "Mark stored");
    }

    pub fn entry(&self, code: &str) -> Option<&MarkEntry> {
        self.entries.get(code)
    }

    /// Total for `code`, treating unset values and unknown codes as zero.
    pub fn total(&self, code: &str) -> i32 {
        self.entries.get(code).map_or(0, MarkEntry::total)
    }

    /// Resets every entry to unset.
    pub fn clear(&mut self) {
        for entry in self.entries.values_mut() {
            *entry = MarkEntry::default();
        }
    }
}
