//! Display and export surfaces for a [`ScoreCard`].
//!
//! Supports a plain-text table, JSON, CSV, and a PDF score card.

mod pdf;

pub use pdf::{pdf_bytes, write_pdf};

use std::fmt;
use std::fs::File;
use std::str::FromStr;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;
use tracing::{debug, info};

use crate::grading::ScoreCard;

/// Renders the score card as a fixed-width text table. Unset marks are blank.
pub fn render_table(card: &ScoreCard) -> String {
    Table(card).to_string()
}

struct Table<'a>(&'a ScoreCard);

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let card = self.0;

        writeln!(f, "{}", card.title)?;
        writeln!(f, "{}", card.program)?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<8} {:<46} {:>3} {:>8} {:>8} {:>5} {:>5} {:>3}",
            "Code", "Title", "Cr", "Internal", "External", "Total", "Grade", "GP"
        )?;

        for row in &card.courses {
            writeln!(
                f,
                "{:<8} {:<46} {:>3} {:>8} {:>8} {:>5} {:>5} {:>3}",
                row.code,
                row.title,
                row.credits,
                blank_if_unset(row.internal),
                blank_if_unset(row.external),
                row.total,
                row.grade.label(),
                row.grade_point,
            )?;
        }

        writeln!(f)?;
        writeln!(f, "CGPA: {}", card.cgpa)
    }
}

pub(crate) fn blank_if_unset(value: Option<u8>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Logs the score card using Rust's debug pretty-print format.
pub fn print_pretty(card: &ScoreCard) {
    debug!("{:#?}", card);
}

pub fn to_json(card: &ScoreCard) -> Result<String> {
    Ok(serde_json::to_string_pretty(card)?)
}

#[derive(Serialize)]
struct CsvRow<'a> {
    code: &'a str,
    title: &'a str,
    credits: u32,
    internal: Option<u8>,
    external: Option<u8>,
    total: i32,
    grade: &'a str,
    grade_point: u8,
    result: &'a str,
    cgpa: &'a str,
}

/// Writes one CSV row per course, replacing `path` if it exists.
///
/// Each row repeats the aggregate CGPA so the file stands alone.
pub fn write_csv(path: &str, card: &ScoreCard) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {path}"))?;
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(file);

    for row in &card.courses {
        writer.serialize(CsvRow {
            code: &row.code,
            title: &row.title,
            credits: row.credits,
            internal: row.internal,
            external: row.external,
            total: row.total,
            grade: row.grade.label(),
            grade_point: row.grade_point,
            result: pass_fail(row.passed),
            cgpa: &card.cgpa,
        })?;
    }
    writer.flush()?;

    Ok(())
}

pub(crate) fn pass_fail(passed: bool) -> &'static str {
    if passed { "PASS" } else { "FAIL" }
}

/// Target format for [`export`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Csv,
    Json,
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(anyhow::anyhow!(
                "unknown export format '{other}', expected pdf, csv or json"
            )),
        }
    }
}

/// Writes the score card to `path` in the requested format.
pub fn export(path: &str, format: ExportFormat, card: &ScoreCard) -> Result<()> {
    match format {
        ExportFormat::Pdf => write_pdf(path, card)?,
        ExportFormat::Csv => write_csv(path, card)?,
        ExportFormat::Json => std::fs::write(path, to_json(card)?)
            .with_context(|| format!("failed to write {path}"))?,
    }

    info!(path, format = ?format, cgpa = %card.cgpa, "Score card exported");
    Ok(())
}
