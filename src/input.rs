//! Mark input from the command line and from CSV files.

use std::fs::File;
use std::str::FromStr;

use anyhow::{Context, Result};
use cgpa_calc::marks::Field;
use cgpa_calc::session::Session;
use serde::Deserialize;
use tracing::{debug, info};

/// A single `CODE.FIELD=VALUE` write given with `--set`. The value may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkWrite {
    pub code: String,
    pub field: Field,
    pub value: String,
}

impl FromStr for MarkWrite {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (target, value) = s
            .split_once('=')
            .with_context(|| format!("expected CODE.FIELD=VALUE, got '{s}'"))?;
        let (code, field) = target
            .split_once('.')
            .with_context(|| format!("expected CODE.FIELD before '=', got '{target}'"))?;

        Ok(MarkWrite {
            code: code.trim().to_string(),
            field: field.parse()?,
            value: value.to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct MarkRow {
    code: String,
    #[serde(default)]
    internal: String,
    #[serde(default)]
    external: String,
}

/// Feeds every cell of a `code,internal,external` CSV through the session's
/// write path.
#[tracing::instrument(skip(session))]
pub fn apply_marks_csv(path: &str, session: &mut Session) -> Result<usize> {
    let file = File::open(path).with_context(|| format!("failed to open {path}"))?;
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

    let mut rows = 0;
    for result in rdr.deserialize() {
        let row: MarkRow = result.with_context(|| format!("bad row in {path}"))?;
        session.set_mark(&row.code, Field::Internal, &row.internal);
        session.set_mark(&row.code, Field::External, &row.external);
        rows += 1;
    }

    info!(rows, cgpa = %session.cgpa(), "Marks loaded");
    Ok(rows)
}

pub fn apply_writes(writes: &[MarkWrite], session: &mut Session) {
    for write in writes {
        let cgpa = session.set_mark(&write.code, write.field, &write.value);
        debug!(code = %write.code, field = %write.field, cgpa, "Applied --set");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgpa_calc::catalog::Catalog;
    use std::env;
    use std::fs;

    #[test]
    fn test_parse_mark_write() {
        let write: MarkWrite = "OBA1101.internal=25".parse().unwrap();
        assert_eq!(write.code, "OBA1101");
        assert_eq!(write.field, Field::Internal);
        assert_eq!(write.value, "25");
    }

    #[test]
    fn test_parse_mark_write_empty_value() {
        let write: MarkWrite = "OBA1102.external=".parse().unwrap();
        assert_eq!(write.field, Field::External);
        assert_eq!(write.value, "");
    }

    #[test]
    fn test_parse_mark_write_rejects_malformed() {
        assert!("OBA1101=25".parse::<MarkWrite>().is_err());
        assert!("OBA1101.internal".parse::<MarkWrite>().is_err());
        assert!("OBA1101.quiz=4".parse::<MarkWrite>().is_err());
    }

    #[test]
    fn test_apply_writes() {
        let catalog = Catalog::default();
        let mut session = Session::new(&catalog);
        let writes = vec![
            "OBA1101.internal=30".parse().unwrap(),
            "OBA1101.external=999".parse().unwrap(),
        ];

        apply_writes(&writes, &mut session);
        assert_eq!(session.marks().total("OBA1101"), 100);
        assert_eq!(session.cgpa(), "1.25");
    }

    #[test]
    fn test_apply_marks_csv() {
        let path = format!("{}/cgpa_calc_test_marks.csv", env::temp_dir().display());
        fs::write(
            &path,
            "code,internal,external\nOBA1101,25,65\nOBA1102, 30 ,\nOBA1103,abc,80\n",
        )
        .unwrap();

        let catalog = Catalog::default();
        let mut session = Session::new(&catalog);
        let rows = apply_marks_csv(&path, &mut session).unwrap();

        assert_eq!(rows, 3);
        let marks = session.marks();
        assert_eq!(marks.total("OBA1101"), 90);
        assert_eq!(marks.entry("OBA1102").unwrap().internal, Some(30));
        assert_eq!(marks.entry("OBA1102").unwrap().external, None);
        assert_eq!(marks.entry("OBA1103").unwrap().internal, Some(0));
        assert_eq!(marks.entry("OBA1103").unwrap().external, Some(70));

        fs::remove_file(&path).unwrap();
    }
}
