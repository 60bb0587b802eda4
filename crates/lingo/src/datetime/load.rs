//! Deserialization and compilation of `date_time.json` files.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::datetime::{CalendarTables, DateFormatKey, DateTimeData};
use crate::error::LoadError;
use crate::parser::{Template, parse_template};
use crate::rules::{CascadeRules, Rule, RuleCategory, RuleTable, WordTable};

/// A `date_time.json` document as written on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDateTimeConfig {
    pub decade_format: Option<RawRuleSection>,
    pub hundreds_format: Option<RawRuleSection>,
    pub thousand_format: Option<RawRuleSection>,
    pub year_format: Option<RawRuleSection>,
    pub date_format: Option<BTreeMap<String, String>>,
    pub date_time_format: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub weekday: BTreeMap<String, String>,
    #[serde(default)]
    pub month: BTreeMap<String, String>,
    #[serde(default)]
    pub date: BTreeMap<String, String>,
    #[serde(default)]
    pub number: BTreeMap<String, String>,
}

/// One rule cascade section: numbered rules plus `default` (and `bc` for years).
///
/// Keys other than the numbered rules are kept as raw values and ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRuleSection {
    pub default: String,
    pub bc: Option<String>,
    #[serde(flatten)]
    pub rules: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRule {
    #[serde(rename = "match")]
    pub pattern: String,
    pub format: String,
}

impl RawDateTimeConfig {
    /// Parse a document; `path` is only used for error messages.
    pub fn from_json(path: &Path, json: &str) -> Result<Self, LoadError> {
        serde_json::from_str(json).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn section(&self, category: RuleCategory) -> Option<&RawRuleSection> {
        match category {
            RuleCategory::Decade => self.decade_format.as_ref(),
            RuleCategory::Hundreds => self.hundreds_format.as_ref(),
            RuleCategory::Thousand => self.thousand_format.as_ref(),
            RuleCategory::Year => self.year_format.as_ref(),
        }
    }
}

impl RawRuleSection {
    /// Rules reachable by counting up from "1" until a key is missing.
    ///
    /// Only these entries are deserialized as rules.
    pub fn dense_rules(
        &self,
    ) -> impl Iterator<Item = (usize, Result<RawRule, serde_json::Error>)> {
        (1..).map_while(|index: usize| {
            self.rules
                .get(&index.to_string())
                .map(|value| (index, RawRule::deserialize(value)))
        })
    }
}

/// Read and compile the data file at `path`.
pub fn load_file(path: &Path, language: &str) -> Result<DateTimeData, LoadError> {
    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    compile(path, language, &RawDateTimeConfig::from_json(path, &json)?)
}

/// Compile a parsed document into formatting data.
pub fn compile(
    path: &Path,
    language: &str,
    raw: &RawDateTimeConfig,
) -> Result<DateTimeData, LoadError> {
    let compiler = Compiler { path };
    let year_section = compiler.section(raw, RuleCategory::Year)?;
    let rules = CascadeRules {
        decade: compiler.rule_table(raw, RuleCategory::Decade)?,
        hundreds: compiler.rule_table(raw, RuleCategory::Hundreds)?,
        thousand: compiler.rule_table(raw, RuleCategory::Thousand)?,
        year: compiler.rule_table(raw, RuleCategory::Year)?,
        bc: year_section.bc.clone().unwrap_or_default(),
        numbers: WordTable::new(raw.number.clone()),
    };

    let date_format = raw
        .date_format
        .as_ref()
        .ok_or_else(|| compiler.missing("date_format"))?;
    let mut date_formats = BTreeMap::new();
    for key in DateFormatKey::ALL {
        let source = date_format
            .get(key.name())
            .ok_or_else(|| compiler.missing(&format!("date_format.{}", key.name())))?;
        let template = compiler.template(&format!("date_format.{}", key.name()), source)?;
        date_formats.insert(key, template);
    }

    let date_time = raw
        .date_time_format
        .as_ref()
        .and_then(|section| section.get("date_time"))
        .ok_or_else(|| compiler.missing("date_time_format.date_time"))?;

    Ok(DateTimeData {
        language: language.to_string(),
        source: path.to_path_buf(),
        rules,
        calendar: CalendarTables {
            weekday: raw.weekday.clone(),
            month: raw.month.clone(),
            date: raw.date.clone(),
        },
        date_formats,
        date_time: compiler.template("date_time_format.date_time", date_time)?,
    })
}

struct Compiler<'a> {
    path: &'a Path,
}

impl Compiler<'_> {
    fn missing(&self, section: &str) -> LoadError {
        LoadError::MissingSection {
            path: self.path_buf(),
            section: section.to_string(),
        }
    }

    fn path_buf(&self) -> PathBuf {
        self.path.to_path_buf()
    }

    fn section<'r>(
        &self,
        raw: &'r RawDateTimeConfig,
        category: RuleCategory,
    ) -> Result<&'r RawRuleSection, LoadError> {
        raw.section(category)
            .ok_or_else(|| self.missing(category.key()))
    }

    fn template(&self, key: &str, source: &str) -> Result<Template, LoadError> {
        parse_template(source).map_err(|source| LoadError::InvalidTemplate {
            path: self.path_buf(),
            key: key.to_string(),
            source,
        })
    }

    fn rule_table(
        &self,
        raw: &RawDateTimeConfig,
        category: RuleCategory,
    ) -> Result<RuleTable, LoadError> {
        let section = self.section(raw, category)?;
        let mut rules = Vec::new();
        for (index, rule) in section.dense_rules() {
            let rule = rule.map_err(|source| LoadError::InvalidRule {
                path: self.path_buf(),
                category: category.key().to_string(),
                index: index.to_string(),
                source,
            })?;
            let template =
                self.template(&format!("{}.{index}.format", category.key()), &rule.format)?;
            let compiled = Rule::new(index, &rule.pattern, template).map_err(|source| {
                LoadError::InvalidPattern {
                    path: self.path_buf(),
                    category: category.key().to_string(),
                    index: index.to_string(),
                    source,
                }
            })?;
            rules.push(compiled);
        }
        let default = self.template(&format!("{}.default", category.key()), &section.default)?;
        Ok(RuleTable::new(rules, default))
    }
}
