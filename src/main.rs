//! CLI entry point for the CGPA calculator.
//!
//! Provides subcommands for listing the course catalog, printing a score
//! card for a set of marks, exporting it as PDF/CSV/JSON, managing the
//! display theme, and an interactive editing session.

mod input;
mod repl;

use crate::input::{MarkWrite, apply_marks_csv, apply_writes};
use anyhow::Result;
use cgpa_calc::catalog::Catalog;
use cgpa_calc::output::{ExportFormat, export, print_pretty, render_table};
use cgpa_calc::session::Session;
use cgpa_calc::settings::{JsonFileSettings, SettingsStore, Theme};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "cgpa_calc")]
#[command(about = "Compute grades and CGPA for a semester's courses", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the courses of the term with their credits
    Courses,
    /// Print the score card for the given marks
    Card {
        #[command(flatten)]
        marks: MarkArgs,
    },
    /// Export the score card to a file
    Export {
        #[command(flatten)]
        marks: MarkArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = FormatArg::Pdf)]
        format: FormatArg,

        /// Destination file
        #[arg(short, long, default_value = "scorecard.pdf")]
        output: String,
    },
    /// Show or change the display theme
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },
    /// Edit marks line by line, recomputing after every change
    Interactive {
        #[command(flatten)]
        marks: MarkArgs,
    },
}

#[derive(Args)]
struct MarkArgs {
    /// CSV file with `code,internal,external` columns
    #[arg(short, long, value_name = "FILE")]
    marks: Option<String>,

    /// Single mark as CODE.FIELD=VALUE, e.g. OBA1101.internal=25 (repeatable)
    #[arg(short, long, value_name = "CODE.FIELD=VALUE")]
    set: Vec<MarkWrite>,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Pdf,
    Csv,
    Json,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Pdf => ExportFormat::Pdf,
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Json => ExportFormat::Json,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeAction {
    Show,
    Toggle,
    Dark,
    Light,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/cgpa_calc.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("cgpa_calc.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(log_filter(
            std::env::var("RUST_LOG").ok().as_deref(),
            LevelFilter::WARN,
        ));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(log_filter(
            std::env::var("RUST_LOG_JSON").ok().as_deref(),
            LevelFilter::DEBUG,
        ));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let settings_path =
        std::env::var("CGPA_SETTINGS_PATH").unwrap_or_else(|_| "settings.json".to_string());
    let settings = JsonFileSettings::new(settings_path);

    let catalog = Catalog::default();
    let cli = Cli::parse();

    match cli.command {
        Commands::Courses => {
            for course in catalog.courses() {
                println!("{:<8} {:<46} {} credits", course.code, course.title, course.credits);
            }
            println!("Total credits: {}", catalog.total_credits());
        }
        Commands::Card { marks } => {
            let session = load_session(&catalog, &marks)?;
            let card = session.score_card();
            print_pretty(&card);
            println!("{}", render_table(&card));
        }
        Commands::Export {
            marks,
            format,
            output,
        } => {
            let session = load_session(&catalog, &marks)?;
            export(&output, format.into(), &session.score_card())?;
            println!("CGPA {} exported to {}", session.cgpa(), output);
        }
        Commands::Theme { action } => {
            let theme = match action {
                ThemeAction::Show => settings.theme(),
                ThemeAction::Toggle => settings.toggle()?,
                ThemeAction::Dark => set_theme(&settings, Theme::Dark)?,
                ThemeAction::Light => set_theme(&settings, Theme::Light)?,
            };
            info!(path = %settings.path().display(), theme = theme.name(), "Theme");
            println!("{}", theme.name());
        }
        Commands::Interactive { marks } => {
            let mut session = load_session(&catalog, &marks)?;
            let stdin = std::io::stdin();
            repl::run(&mut session, &settings, stdin.lock(), std::io::stdout())?;
        }
    }

    Ok(())
}

/// Filter built from an env-var value, falling back to `default` when the
/// variable is unset or names no level of its own.
fn log_filter(directives: Option<&str>, default: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .parse_lossy(directives.unwrap_or_default())
}

/// Starts a session and applies the CSV file first, then each `--set`.
#[tracing::instrument(skip_all, fields(marks_file = ?args.marks, writes = args.set.len()))]
fn load_session<'a>(catalog: &'a Catalog, args: &MarkArgs) -> Result<Session<'a>> {
    let mut session = Session::new(catalog);

    if let Some(path) = &args.marks {
        apply_marks_csv(path, &mut session)?;
    }
    apply_writes(&args.set, &mut session);

    info!(cgpa = %session.cgpa(), "Session ready");
    Ok(session)
}

fn set_theme(settings: &dyn SettingsStore, theme: Theme) -> Result<Theme> {
    settings.save(theme.is_dark())?;
    Ok(theme)
}
