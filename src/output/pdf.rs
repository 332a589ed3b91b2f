//! PDF score card rendered with `printpdf` builtin fonts.

use std::fs;

use anyhow::{Context, Result, anyhow};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use tracing::debug;

use crate::grading::ScoreCard;
use crate::output::{blank_if_unset, pass_fail};

const COLUMNS: [(&str, f32); 7] = [
    ("Code", 15.0),
    ("Title", 38.0),
    ("Internal", 118.0),
    ("External", 137.0),
    ("Total", 156.0),
    ("Grade", 171.0),
    ("Result", 186.0),
];

/// Longest title that fits between the title and internal columns.
const TITLE_WIDTH: usize = 44;

/// Renders the score card as a single A4 PDF document.
pub fn pdf_bytes(card: &ScoreCard) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(&card.title, Mm(210.0), Mm(297.0), "Score card");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| anyhow!("failed to load Helvetica: {e}"))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| anyhow!("failed to load Helvetica-Bold: {e}"))?;
    let layer = doc.get_page(page).get_layer(layer);

    layer.use_text(card.title.as_str(), 20.0, Mm(15.0), Mm(275.0), &bold);
    layer.use_text(card.program.as_str(), 11.0, Mm(15.0), Mm(267.0), &regular);
    let generated = format!("Generated {}", card.generated_at.format("%Y-%m-%d %H:%M UTC"));
    layer.use_text(generated, 9.0, Mm(15.0), Mm(261.0), &regular);

    let mut y = 248.0;
    let header: Vec<String> = COLUMNS.iter().map(|(name, _)| name.to_string()).collect();
    row(&layer, &bold, y, &header);

    for course in &card.courses {
        y -= 8.0;
        let cells = vec![
            course.code.clone(),
            truncate(&course.title, TITLE_WIDTH),
            blank_if_unset(course.internal),
            blank_if_unset(course.external),
            course.total.to_string(),
            course.grade.label().to_string(),
            pass_fail(course.passed).to_string(),
        ];
        row(&layer, &regular, y, &cells);
    }

    y -= 16.0;
    let cgpa = format!("CGPA: {}", card.cgpa);
    layer.use_text(cgpa, 16.0, Mm(15.0), Mm(y), &bold);

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| anyhow!("failed to serialize PDF: {e}"))?;
    debug!(bytes = bytes.len(), courses = card.courses.len(), "PDF rendered");
    Ok(bytes)
}

/// Renders the score card and writes it to `path`.
pub fn write_pdf(path: &str, card: &ScoreCard) -> Result<()> {
    let bytes = pdf_bytes(card)?;
    fs::write(path, bytes).with_context(|| format!("failed to write {path}"))?;
    Ok(())
}

fn row(layer: &PdfLayerReference, font: &IndirectFontRef, y: f32, cells: &[String]) {
    for ((_, x), cell) in COLUMNS.iter().zip(cells) {
        layer.use_text(cell.as_str(), 10.0, Mm(*x), Mm(y), font);
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(max - 3).collect();
        cut.push_str("...");
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::grading::score_card;
    use crate::marks::MarkStore;

    #[test]
    fn test_pdf_bytes_is_pdf() {
        let catalog = Catalog::default();
        let marks = MarkStore::new(&catalog);
        let bytes = pdf_bytes(&score_card(&catalog, &marks)).unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("R Programming", 44), "R Programming");
        assert_eq!(
            truncate("Management Concepts and Organization Behavior", 20),
            "Management Concep..."
        );
    }
}
