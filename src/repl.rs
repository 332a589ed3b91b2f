//! Line-oriented editing session.
//!
//! Each `set` goes through [`Session::set_mark`], which recomputes the CGPA
//! before the next line is read.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Result, bail};
use cgpa_calc::marks::Field;
use cgpa_calc::output::{ExportFormat, export, render_table};
use cgpa_calc::session::Session;
use cgpa_calc::settings::SettingsStore;
use tracing::{info, warn};

const HELP: &str = "\
Commands:
  set CODE internal|external [VALUE]   store a mark (no VALUE clears it)
  show                                 print the score card
  cgpa                                 print the current CGPA
  reset                                clear every mark
  export pdf|csv|json PATH             write the score card
  theme [toggle]                       show or flip the display theme
  help                                 this text
  quit                                 leave the session";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Set {
        code: String,
        field: Field,
        value: String,
    },
    Show,
    Cgpa,
    Reset,
    Export {
        format: ExportFormat,
        path: String,
    },
    Theme {
        toggle: bool,
    },
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let command = match words.as_slice() {
            ["set", code, field] => Command::Set {
                code: code.to_string(),
                field: field.parse()?,
                value: String::new(),
            },
            ["set", code, field, value] => Command::Set {
                code: code.to_string(),
                field: field.parse()?,
                value: value.to_string(),
            },
            ["show"] => Command::Show,
            ["cgpa"] => Command::Cgpa,
            ["reset"] => Command::Reset,
            ["export", format, path] => Command::Export {
                format: format.parse()?,
                path: path.to_string(),
            },
            ["theme"] => Command::Theme { toggle: false },
            ["theme", "toggle"] => Command::Theme { toggle: true },
            ["help"] | ["?"] => Command::Help,
            ["quit"] | ["exit"] => Command::Quit,
            _ => bail!("unrecognised command '{}', try 'help'", line.trim()),
        };
        Ok(command)
    }
}

/// Reads commands from `input` until `quit` or end of input.
///
/// Bad commands and failed exports are reported on `out` and the session
/// carries on.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    settings: &dyn SettingsStore,
    input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "{}", render_table(&session.score_card()))?;
    writeln!(out, "Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };

        match command {
            Command::Set { code, field, value } => {
                if session.catalog().get(&code).is_none() {
                    writeln!(out, "error: unknown course '{code}'")?;
                    continue;
                }
                let cgpa = session.set_mark(&code, field, &value).to_string();
                let entry = session.marks().entry(&code).copied().unwrap_or_default();
                let stored = entry
                    .get(field)
                    .map_or_else(|| "unset".to_string(), |v| v.to_string());
                writeln!(out, "{code} {field} = {stored}, CGPA {cgpa}")?;
            }
            Command::Show => writeln!(out, "{}", render_table(&session.score_card()))?,
            Command::Cgpa => writeln!(out, "{}", session.cgpa())?,
            Command::Reset => {
                let cgpa = session.reset();
                writeln!(out, "All marks cleared, CGPA {cgpa}")?;
            }
            Command::Export { format, path } => {
                match export(&path, format, &session.score_card()) {
                    Ok(()) => writeln!(out, "Exported to {path}")?,
                    Err(e) => {
                        warn!(error = %e, path, "Export failed");
                        writeln!(out, "error: {e:#}")?;
                    }
                }
            }
            Command::Theme { toggle } => {
                let theme = if toggle {
                    match settings.toggle() {
                        Ok(theme) => theme,
                        Err(e) => {
                            warn!(error = %e, "Theme not saved");
                            writeln!(out, "error: {e:#}")?;
                            continue;
                        }
                    }
                } else {
                    settings.theme()
                };
                writeln!(out, "Theme: {}", theme.name())?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
        }
    }

    info!(cgpa = %session.cgpa(), "Interactive session ended");
    Ok(())
}
