//! Error types for lingo dispatch, locale data loading, and formatting.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;

/// Errors raised while resolving a localized operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The requested language has no formatting support at all.
    #[error("language '{language}' is not supported (supported: {})", supported.join(", "))]
    UnresolvedLanguage {
        language: String,
        supported: Vec<String>,
    },

    /// No functions were registered for the module.
    #[error("module '{module}' is not registered")]
    ModuleNotRegistered { module: String },

    /// The language is supported but not currently loaded.
    #[error("language '{language}' is not loaded for module '{module}'")]
    LanguageNotLoaded { module: String, language: String },

    /// The language is loaded but the operation has no implementation.
    #[error("{operation} is not localized for '{language}': {message}")]
    NotLocalized {
        operation: String,
        language: String,
        message: String,
    },
}

impl LookupError {
    /// Whether this error means a language exists but lacks the operation.
    ///
    /// Formatter convenience operations recover from this case by returning
    /// the raw input.
    pub fn is_not_localized(&self) -> bool {
        matches!(self, LookupError::NotLocalized { .. })
    }
}

/// Errors that occur while loading locale data files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a data file.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed JSON in a data file.
    #[error("{}:{}:{}: {source}", path.display(), source.line(), source.column())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A rule's match pattern is not a valid regular expression.
    #[error("{}: {category}.{index}: invalid pattern: {source}", path.display())]
    InvalidPattern {
        path: PathBuf,
        category: String,
        index: String,
        #[source]
        source: regex::Error,
    },

    /// A numbered rule entry is not a `{match, format}` object.
    #[error("{}: {category}.{index}: invalid rule: {source}", path.display())]
    InvalidRule {
        path: PathBuf,
        category: String,
        index: String,
        #[source]
        source: serde_json::Error,
    },

    /// A rule or date template could not be parsed.
    #[error("{}: {key}: {source}", path.display())]
    InvalidTemplate {
        path: PathBuf,
        key: String,
        #[source]
        source: ParseError,
    },

    /// A required section or key is missing from the data file.
    #[error("{}: missing '{section}'", path.display())]
    MissingSection { path: PathBuf, section: String },

    /// Neither the requested locale nor the default locale has a data file.
    #[error("no '{file}' found for '{language}' or the default locale")]
    MissingDefaultData { file: String, language: String },
}

/// Errors raised while formatting a value.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A template references a name that the formatting stage does not bind.
    #[error("unresolved placeholder '{{{name}}}' in template \"{template}\"")]
    UnresolvedPlaceholder { name: String, template: String },

    /// A calendar table has no entry for the requested key.
    #[error("no '{table}' entry for '{key}'")]
    MissingCalendarEntry { table: String, key: String },

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Non-fatal issues found by linting locale data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadWarning {
    /// Rule keys should be "1", "2", ... with no gaps; later rules are ignored.
    #[error("{language}: {section}: rule '{rule}' is unreachable (rules must be numbered 1..n without gaps)")]
    UnreachableRule {
        language: String,
        section: String,
        rule: String,
    },

    /// A template uses a name the stage never binds.
    #[error("{language}: {section}: placeholder '{{{name}}}' is not available in this stage{}", format_suggestions(suggestions))]
    UnknownPlaceholder {
        language: String,
        section: String,
        name: String,
        suggestions: Vec<String>,
    },

    /// A calendar table lacks an entry that formatting will request.
    #[error("{language}: table '{table}' has no entry for '{key}'")]
    MissingCalendarEntry {
        language: String,
        table: String,
        key: String,
    },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("; did you mean: {}?", suggestions.join(", "))
    }
}

/// Compute typo suggestions using Levenshtein distance.
///
/// Returns up to three candidates within edit distance 1 (for names of three
/// characters or fewer) or 2, closest first.
pub fn compute_suggestions<S: AsRef<str>>(name: &str, available: &[S]) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .iter()
        .filter_map(|candidate| {
            let candidate = candidate.as_ref();
            let dist = strsim::levenshtein(name, candidate);
            (dist <= max_distance && dist > 0).then(|| (dist, candidate.to_string()))
        })
        .collect();
    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
