//! Output formatting utilities

use crate::error::CliResult;
use checkform_core::Notice;
use colored::*;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Print a vector of items in the specified format
pub fn print_output<T: Serialize + Tabled>(data: Vec<T>, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No results".dimmed());
            } else {
                println!("{}", Table::new(data));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&data)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&data)?),
    }
    Ok(())
}

/// Print a single item in the specified format
pub fn print_single<T: Serialize>(data: &T, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table | OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?)
        }
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(data)?),
    }
    Ok(())
}

/// Severity of a one-line status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
    Warning,
    Info,
}

impl Tone {
    fn marker(self) -> ColoredString {
        match self {
            Tone::Success => "✓".green().bold(),
            Tone::Failure => "✗".red().bold(),
            Tone::Warning => "!".yellow().bold(),
            Tone::Info => "·".cyan(),
        }
    }
}

/// Format a status message with its marker.
pub fn status_line(tone: Tone, message: &str) -> String {
    format!("{} {}", tone.marker(), message)
}

/// Report the outcome of a submit round trip.
///
/// Failures go to stderr so that `--output json` stays parseable.
pub fn print_notice(notice: Notice) {
    if notice.is_success() {
        println!("{}", status_line(Tone::Success, notice.message()));
    } else {
        eprintln!("{}", status_line(Tone::Failure, notice.message()));
    }
}

pub fn print_error(message: &str) {
    eprintln!("{}", status_line(Tone::Failure, message));
}

pub fn print_warning(message: &str) {
    println!("{}", status_line(Tone::Warning, message));
}

pub fn print_info(message: &str) {
    println!("{}", status_line(Tone::Info, message));
}
