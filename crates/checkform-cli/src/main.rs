//! checkform CLI - terminal front end for the verification questionnaire
//!
//! This CLI lets a reviewer:
//! - List the checks in display order
//! - Answer them interactively with the gating rules applied
//! - Submit a fixed set of answers without prompting

use checkform_types::Answer;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;
mod prompt;
mod render;

use config::{CliConfig, SourceOverrides};
use error::CliResult;

/// checkform CLI application
#[derive(Parser)]
#[command(name = "checkform")]
#[command(about = "checkform - Verification questionnaire CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "CHECKFORM_CONFIG")]
    config: Option<String>,

    /// Check Item Source endpoint
    #[arg(short, long, env = "CHECKFORM_ENDPOINT")]
    endpoint: Option<String>,

    /// Read checks from a local JSON or YAML file instead of an endpoint
    #[arg(long, env = "CHECKFORM_CHECKS_FILE")]
    checks_file: Option<PathBuf>,

    /// Write submitted results to this file (checks-file source only)
    #[arg(long)]
    results_file: Option<PathBuf>,

    /// Output format (table, json, yaml)
    #[arg(short, long, default_value = "table")]
    output: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// List the checks in display order
    List,

    /// Answer the checks interactively
    Run,

    /// Answer the checks in display order and submit, without prompting
    Submit {
        /// Comma-separated answers, e.g. yes,yes,no
        #[arg(short, long, value_delimiter = ',', required = true)]
        answers: Vec<Answer>,
    },

    /// Show configuration
    Config,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = run(cli).await {
        output::print_error(&e.user_message());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    let settings = config.resolve_source(SourceOverrides {
        endpoint: cli.endpoint,
        checks_file: cli.checks_file,
        results_file: cli.results_file,
    });

    match cli.command {
        Commands::Config => output::print_single(&settings, cli.output),
        Commands::List => commands::list::execute(commands::build_source(&settings)?, cli.output).await,
        Commands::Run => commands::run::execute(commands::build_source(&settings)?).await,
        Commands::Submit { answers } => {
            commands::submit::execute(commands::build_source(&settings)?, &answers, cli.output).await
        }
    }
}
