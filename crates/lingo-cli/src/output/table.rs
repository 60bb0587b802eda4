//! Table formatting utilities for CLI output.

use comfy_table::{ContentArrangement, Table, presets};

/// Coverage data for a single language.
pub struct LanguageCoverage {
    /// Language code (e.g., "es-es", "fr-fr").
    pub language: String,
    /// Number of catalog operations with an implementation.
    pub implemented: usize,
    /// Names of operations without an implementation.
    pub missing: Vec<String>,
    /// Where the language's date/time data comes from.
    pub date_time: String,
}

/// Format coverage data as an ASCII table.
pub fn format_coverage_table(catalog_size: usize, coverage: &[LanguageCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Language", "Operations", "Missing", "Date/time data"]);

    for lang in coverage {
        table.add_row(vec![
            lang.language.clone(),
            format!("{}/{}", lang.implemented, catalog_size),
            lang.missing.len().to_string(),
            lang.date_time.clone(),
        ]);
    }

    table
}
