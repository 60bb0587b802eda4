//! Static checks for `date_time.json` data.
//!
//! These catch mistakes that loading accepts silently: rules that the cascade
//! can never reach, templates naming values their stage never binds, and gaps
//! in the calendar tables that only surface when a particular date is
//! formatted.

use std::collections::BTreeMap;

use crate::datetime::{DateFormatKey, RawDateTimeConfig};
use crate::error::{LoadWarning, compute_suggestions};
use crate::parser::parse_template;
use crate::rules::RuleCategory;

const DATE_PLACEHOLDERS: &[&str] = &["weekday", "month", "day", "formatted_year"];
const DATE_TIME_PLACEHOLDERS: &[&str] = &["formatted_date", "formatted_time"];

/// Run every check over a parsed data file.
pub fn lint_date_time_config(language: &str, config: &RawDateTimeConfig) -> Vec<LoadWarning> {
    let mut warnings = Vec::new();
    for category in RuleCategory::ALL {
        lint_rule_section(language, config, category, &mut warnings);
    }
    if let Some(date_format) = &config.date_format {
        for key in DateFormatKey::ALL {
            if let Some(source) = date_format.get(key.name()) {
                let section = format!("date_format.{}", key.name());
                lint_template(language, &section, source, DATE_PLACEHOLDERS, &mut warnings);
            }
        }
    }
    if let Some(source) = config
        .date_time_format
        .as_ref()
        .and_then(|section| section.get("date_time"))
    {
        lint_template(
            language,
            "date_time_format.date_time",
            source,
            DATE_TIME_PLACEHOLDERS,
            &mut warnings,
        );
    }
    lint_calendar(language, "weekday", &config.weekday, 0..=6, &mut warnings);
    lint_calendar(language, "month", &config.month, 1..=12, &mut warnings);
    lint_calendar(language, "date", &config.date, 1..=31, &mut warnings);
    warnings
}

fn lint_rule_section(
    language: &str,
    config: &RawDateTimeConfig,
    category: RuleCategory,
    warnings: &mut Vec<LoadWarning>,
) {
    let Some(section) = config.section(category) else {
        return;
    };
    let reachable = section.dense_rules().count();
    for key in section.rules.keys() {
        let in_range = key
            .parse::<usize>()
            .is_ok_and(|index| (1..=reachable).contains(&index) && key == &index.to_string());
        if !in_range {
            warnings.push(LoadWarning::UnreachableRule {
                language: language.to_string(),
                section: category.key().to_string(),
                rule: key.clone(),
            });
        }
    }

    let available = category.placeholders();
    // Malformed rules are left for the loader to report.
    let rules = section
        .dense_rules()
        .filter_map(|(index, rule)| Some((index, rule.ok()?)));
    for (index, rule) in rules {
        let name = format!("{}.{index}", category.key());
        lint_template(language, &name, &rule.format, available, warnings);
    }
    let name = format!("{}.default", category.key());
    lint_template(language, &name, &section.default, available, warnings);
}

/// Templates that fail to parse are left for the loader to report.
fn lint_template(
    language: &str,
    section: &str,
    source: &str,
    available: &[&str],
    warnings: &mut Vec<LoadWarning>,
) {
    let Ok(template) = parse_template(source) else {
        return;
    };
    for name in template.placeholders() {
        if !available.contains(&name) {
            warnings.push(LoadWarning::UnknownPlaceholder {
                language: language.to_string(),
                section: section.to_string(),
                name: name.to_string(),
                suggestions: compute_suggestions(name, available),
            });
        }
    }
}

fn lint_calendar(
    language: &str,
    table: &str,
    entries: &BTreeMap<String, String>,
    expected: impl Iterator<Item = u32>,
    warnings: &mut Vec<LoadWarning>,
) {
    for key in expected.map(|key| key.to_string()) {
        if !entries.contains_key(&key) {
            warnings.push(LoadWarning::MissingCalendarEntry {
                language: language.to_string(),
                table: table.to_string(),
                key,
            });
        }
    }
}
