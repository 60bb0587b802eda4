//! Coverage command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use lingo::datetime::DATE_TIME_FILE;
use lingo::{LanguageContext, Module, ResourcePaths, SUPPORTED_LANGUAGES};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::output::table::{LanguageCoverage, format_coverage_table};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Languages to report (comma-separated). Defaults to every supported language.
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Extra data directory searched before the bundled data.
    #[arg(long, env = "LINGO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Exit with non-zero code if any language lacks an operation.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    language: String,
    implemented: usize,
    total: usize,
    missing: Vec<String>,
    date_time: String,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let languages: Vec<&str> = if args.lang.is_empty() {
        SUPPORTED_LANGUAGES.to_vec()
    } else {
        args.lang.iter().map(String::as_str).collect()
    };
    let resources = ResourcePaths::builder()
        .maybe_user_dir(args.data_dir.clone())
        .build();
    let context = LanguageContext::builder()
        .languages(&languages)
        .resources(resources)
        .build();

    let catalog = Module::Format.catalog();
    let mut coverage_data: Vec<LanguageCoverage> = Vec::new();
    for primary in context.active_languages() {
        let language = context.full_lang_code(Some(primary));
        let missing: Vec<String> = catalog
            .iter()
            .filter(|&&operation| {
                !context
                    .registry()
                    .entry(Module::Format, &language, operation)
                    .is_some_and(|entry| entry.is_implemented())
            })
            .map(|operation| operation.name().to_string())
            .collect();
        let data_file = Path::new("text").join(&language).join(DATE_TIME_FILE);
        let date_time = match context.resources().resolve(&data_file) {
            Some(path) => path.display().to_string(),
            None => "en-us fallback".to_string(),
        };
        coverage_data.push(LanguageCoverage {
            implemented: catalog.len() - missing.len(),
            language,
            missing,
            date_time,
        });
    }

    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                language: c.language.clone(),
                implemented: c.implemented,
                total: catalog.len(),
                missing: c.missing.clone(),
                date_time: c.date_time.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{json_output}");
    } else {
        let table = format_coverage_table(catalog.len(), &coverage_data);
        println!("{table}");

        for lang_coverage in &coverage_data {
            if !lang_coverage.missing.is_empty() {
                println!("\nMissing in {}:", lang_coverage.language);
                for name in &lang_coverage.missing {
                    println!("  - {name}");
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
