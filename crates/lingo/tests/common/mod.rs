//! Shared fixtures for integration tests.

use std::fs;
use std::path::Path;

use lingo::{LanguageContext, ResourcePaths};
use serde_json::{Value, json};

/// A context over the bundled data only, ignoring any user directory.
pub fn bundled_context(languages: &[&str]) -> LanguageContext {
    LanguageContext::builder()
        .languages(languages)
        .resources(ResourcePaths::builder().build())
        .build()
}

/// A context whose only data directory is `dir`.
pub fn context_in(dir: &Path, languages: &[&str]) -> LanguageContext {
    LanguageContext::builder()
        .languages(languages)
        .resources(ResourcePaths::builder().bundled_dir(dir).build())
        .build()
}

/// A minimal data file with the given year rules and number words.
///
/// The narrower cascades render single digits through `{x}` and fall back
/// to the bare number otherwise.
pub fn data_file(year_rules: Value, numbers: Value) -> Value {
    json!({
        "decade_format": {
            "1": { "match": "^\\d$", "format": "{x}" },
            "default": "{number}"
        },
        "hundreds_format": { "default": "{formatted_decade}" },
        "thousand_format": { "default": "{formatted_hundreds}" },
        "year_format": year_rules,
        "date_format": {
            "date_full": "{weekday} {day} {month} {formatted_year}",
            "date_full_no_year": "{weekday} {day} {month}",
            "date_full_no_year_month": "{weekday} {day}",
            "today": "today",
            "tomorrow": "tomorrow",
            "yesterday": "yesterday"
        },
        "date_time_format": { "date_time": "{formatted_date} @ {formatted_time}" },
        "weekday": { "0": "mon", "1": "tue", "2": "wed", "3": "thu", "4": "fri", "5": "sat", "6": "sun" },
        "month": { "1": "jan", "6": "jun" },
        "date": { "5": "5th", "6": "6th" },
        "number": numbers
    })
}

/// Write `data` as `text/<language>/date_time.json` under `dir`.
pub fn write_data(dir: &Path, language: &str, data: &Value) {
    let folder = dir.join("text").join(language);
    fs::create_dir_all(&folder).unwrap();
    fs::write(
        folder.join("date_time.json"),
        serde_json::to_string_pretty(data).unwrap(),
    )
    .unwrap();
}
