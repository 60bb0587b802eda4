//! Implementation of the `lingo check` command.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use lingo::{LoadError, RuleCategory};
use lingo::datetime::{RawDateTimeConfig, compile};
use lingo::lint_date_time_config;
use miette::{IntoDiagnostic, Result, miette};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::output::LingoDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Files to check (date_time.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Language the files are written for. Defaults to the name of each
    /// file's directory, as in `text/en-us/date_time.json`.
    #[arg(long)]
    pub lang: Option<String>,

    /// Exit with non-zero code if any lint warning is found
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    language: String,
    error: Option<String>,
    warnings: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let mut reports = Vec::new();
    for path in &args.files {
        let language = args
            .lang
            .clone()
            .or_else(|| language_from_path(path))
            .ok_or_else(|| miette!("cannot infer a language for {}; pass --lang", path.display()))?;
        let content = read_to_string(path)
            .into_diagnostic()
            .map_err(|e| miette!("Failed to read {}: {}", path.display(), e))?;
        let report = match check_file(path, &language, &content) {
            Ok(warnings) => FileReport {
                file: path.display().to_string(),
                language,
                error: None,
                warnings,
            },
            Err(diagnostic) if args.json => FileReport {
                file: path.display().to_string(),
                language,
                error: Some(diagnostic.to_string()),
                warnings: Vec::new(),
            },
            Err(diagnostic) => return Err(diagnostic),
        };
        reports.push(report);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports).into_diagnostic()?);
    } else {
        for report in &reports {
            if report.warnings.is_empty() {
                println!("{} {}", "ok".green(), report.file);
            } else {
                println!("{} {}", "warning".yellow(), report.file);
                for warning in &report.warnings {
                    println!("  - {warning}");
                }
            }
        }
    }

    let any_error = reports.iter().any(|report| report.error.is_some());
    let any_warning = reports.iter().any(|report| !report.warnings.is_empty());
    if any_error || (args.strict && any_warning) {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// Parse, compile, and lint one file, returning lint warnings as text.
fn check_file(path: &Path, language: &str, content: &str) -> Result<Vec<String>> {
    let config = RawDateTimeConfig::from_json(path, content).map_err(|err| match err {
        LoadError::Json { source, .. } => {
            miette::Report::new(LingoDiagnostic::from_json_error(path, content, &source))
        }
        other => miette!("{other}"),
    })?;
    compile(path, language, &config).map_err(|err| match &err {
        LoadError::InvalidTemplate {
            key, source: parse, ..
        } => {
            let template = template_source(&config, key).unwrap_or_default();
            miette::Report::new(LingoDiagnostic::from_parse_error(key, &template, parse))
        }
        _ => miette!("{err}"),
    })?;
    Ok(lint_date_time_config(language, &config)
        .iter()
        .map(ToString::to_string)
        .collect())
}

/// Find the template text behind a compile error key such as
/// `year_format.3.format` or `date_format.today`.
fn template_source(config: &RawDateTimeConfig, key: &str) -> Option<String> {
    let mut parts = key.split('.');
    let section = parts.next()?;
    let entry = parts.next()?;
    if let Some(category) = RuleCategory::ALL
        .into_iter()
        .find(|category| category.key() == section)
    {
        let rules = config.section(category)?;
        return if entry == "default" {
            Some(rules.default.clone())
        } else {
            rules
                .rules
                .get(entry)?
                .get("format")?
                .as_str()
                .map(ToString::to_string)
        };
    }
    let table = match section {
        "date_format" => config.date_format.as_ref(),
        "date_time_format" => config.date_time_format.as_ref(),
        _ => None,
    }?;
    table.get(entry).cloned()
}

/// `text/en-us/date_time.json` is written for `en-us`.
fn language_from_path(path: &Path) -> Option<String> {
    path.parent()?
        .file_name()?
        .to_str()
        .filter(|name| lingo::is_supported(name))
        .map(str::to_lowercase)
}
