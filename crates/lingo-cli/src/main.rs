//! lingo CLI entry point.
//!
//! Provides command-line tools for locale data and formatting:
//! - `lingo check` - Validate and lint `date_time.json` files
//! - `lingo coverage` - Report localized operations per language
//! - `lingo format` - Run a formatting operation
//! - `lingo expand` - Expand bracketed sentence templates

mod commands;
mod output;

use std::io;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    CheckArgs, CoverageArgs, ExpandArgs, FormatArgs, run_check, run_coverage, run_expand,
    run_format,
};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "LINGO_LOG";

/// Localized phrasing tools.
#[derive(Debug, Parser)]
#[command(name = "lingo")]
#[command(about = "Localized number, date and phrase tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate and lint date_time.json files
    Check(CheckArgs),
    /// Report localized operations and data per language
    Coverage(CoverageArgs),
    /// Format a value for a language
    Format(FormatArgs),
    /// Expand (a|b) alternatives into every sentence
    Expand(ExpandArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Install the log subscriber. `--verbose` wins over the environment.
fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Coverage(args) => run_coverage(args),
        Commands::Format(args) => run_format(args),
        Commands::Expand(args) => run_expand(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{e:?}");
            exit(exitcode::SOFTWARE);
        }
    }
}
