//! Nutricore CLI - Command-line interface for the nutricore engine
//!
//! Commands:
//! - targets: Compute daily targets from a profile document
//! - report: Compute a daily intake report from a profile and entry log
//! - shopping: Generate a weekly shopping list from an entry log
//! - tip: Print the educational tip for a date

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::{NaiveDate, Utc};
use nutricore::advice::tip_of_day;
use nutricore::pipeline::{daily_report_from_json, parse_entries_ndjson, targets_from_profile_json};
use nutricore::planning::{shopping_list, week_start_of};
use nutricore::{NutritionError, ENGINE_VERSION};

/// Nutricore - Computation engine for family nutrition tracking
#[derive(Parser)]
#[command(name = "nutricore")]
#[command(version = ENGINE_VERSION)]
#[command(about = "Compute nutrition targets, daily reports, and shopping lists", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute daily targets from a profile document
    Targets {
        /// Profile JSON file (use - for stdin)
        #[arg(short, long)]
        profile: PathBuf,
    },

    /// Compute a daily intake report from a profile and entry log
    Report {
        /// Profile JSON file
        #[arg(short, long)]
        profile: PathBuf,

        /// Entry log, newline-delimited JSON (use - for stdin)
        #[arg(short, long)]
        entries: PathBuf,

        /// Report date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Generate a weekly shopping list from an entry log
    Shopping {
        /// Entry log, newline-delimited JSON (use - for stdin)
        #[arg(short, long)]
        entries: PathBuf,

        /// Week start date (YYYY-MM-DD, defaults to the current week's Sunday)
        #[arg(long)]
        week_start: Option<String>,

        /// Output format
        #[arg(long, default_value = "json-pretty")]
        output_format: OutputFormat,
    },

    /// Print the educational tip for a date
    Tip {
        /// Date driving the rotation (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), NutricoreCliError> {
    match cli.command {
        Commands::Targets { profile } => cmd_targets(&profile),

        Commands::Report {
            profile,
            entries,
            date,
        } => cmd_report(&profile, &entries, date.as_deref()),

        Commands::Shopping {
            entries,
            week_start,
            output_format,
        } => cmd_shopping(&entries, week_start.as_deref(), output_format),

        Commands::Tip { date, json } => cmd_tip(date.as_deref(), json),
    }
}

fn cmd_targets(profile: &Path) -> Result<(), NutricoreCliError> {
    let profile_json = read_input(profile)?;
    let targets = targets_from_profile_json(&profile_json)?;
    println!("{targets}");
    Ok(())
}

fn cmd_report(
    profile: &Path,
    entries: &Path,
    date: Option<&str>,
) -> Result<(), NutricoreCliError> {
    let profile_json = read_input(profile)?;
    let entries_ndjson = read_input(entries)?;
    let date = parse_date_or_today(date)?;

    let report = daily_report_from_json(&profile_json, &entries_ndjson, date)?;
    println!("{report}");
    Ok(())
}

fn cmd_shopping(
    entries: &Path,
    week_start: Option<&str>,
    output_format: OutputFormat,
) -> Result<(), NutricoreCliError> {
    let entries_ndjson = read_input(entries)?;
    let entries = parse_entries_ndjson(&entries_ndjson)?;

    let week_start = match week_start {
        Some(s) => parse_date(s)?,
        None => week_start_of(Utc::now().date_naive()),
    };

    let list = shopping_list(&entries, week_start);
    let output = match output_format {
        OutputFormat::Json => serde_json::to_string(&list)?,
        OutputFormat::JsonPretty => serde_json::to_string_pretty(&list)?,
    };
    println!("{output}");
    Ok(())
}

fn cmd_tip(date: Option<&str>, json: bool) -> Result<(), NutricoreCliError> {
    let date = parse_date_or_today(date)?;
    let tip = tip_of_day(date);

    if json {
        let value = serde_json::json!({
            "title": tip.title,
            "message": tip.message,
            "category": tip.category,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", tip.title);
        println!("{}", tip.message);
    }
    Ok(())
}

/// Read a file, or stdin when the path is `-`
fn read_input(path: &Path) -> Result<String, NutricoreCliError> {
    if path.to_string_lossy() == "-" {
        if atty::is(atty::Stream::Stdin) {
            eprintln!("reading from terminal; pipe input or finish with Ctrl-D");
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, NutricoreCliError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| NutricoreCliError::BadDate(s.to_string()))
}

fn parse_date_or_today(date: Option<&str>) -> Result<NaiveDate, NutricoreCliError> {
    match date {
        Some(s) => parse_date(s),
        None => Ok(Utc::now().date_naive()),
    }
}

#[derive(Debug)]
enum NutricoreCliError {
    Io(io::Error),
    Core(NutritionError),
    Json(serde_json::Error),
    BadDate(String),
}

impl From<io::Error> for NutricoreCliError {
    fn from(e: io::Error) -> Self {
        NutricoreCliError::Io(e)
    }
}

impl From<NutritionError> for NutricoreCliError {
    fn from(e: NutritionError) -> Self {
        NutricoreCliError::Core(e)
    }
}

impl From<serde_json::Error> for NutricoreCliError {
    fn from(e: serde_json::Error) -> Self {
        NutricoreCliError::Json(e)
    }
}

/// Structured error for stderr
#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<NutricoreCliError> for CliError {
    fn from(e: NutricoreCliError) -> Self {
        match e {
            NutricoreCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            NutricoreCliError::Core(e) => CliError {
                code: "PARSE_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Ensure documents match the stored profile/entry format".to_string()),
            },
            NutricoreCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
            NutricoreCliError::BadDate(s) => CliError {
                code: "BAD_DATE".to_string(),
                message: format!("Cannot parse date: {s}"),
                hint: Some("Use the YYYY-MM-DD format".to_string()),
            },
        }
    }
}
