//! Miette diagnostic wrapper for locale data and sentence errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use lingo::parser::ParseError;
use lingo::{ExpansionError, tokenize};
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic pointing into a source text.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(lingo::data))]
pub struct LingoDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl LingoDiagnostic {
    /// Point at a 1-based `line`:`column` in `content`.
    pub fn at_position(
        name: &str,
        content: &str,
        line: usize,
        column: usize,
        message: String,
    ) -> Self {
        // Sum of (line_length + 1) for lines before error line, plus column.
        let line_start = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>();
        let column_bytes = content[line_start.min(content.len())..]
            .chars()
            .take(column.saturating_sub(1))
            .map(char::len_utf8)
            .sum::<usize>();

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = (line_start + column_bytes).min(content.len());

        LingoDiagnostic {
            src: NamedSource::new(name.to_string(), content.to_string()),
            span: (offset, 1).into(),
            message,
            help: None,
        }
    }

    /// Diagnostic for malformed JSON in a data file.
    pub fn from_json_error(path: &Path, content: &str, err: &serde_json::Error) -> Self {
        Self::at_position(
            &path.display().to_string(),
            content,
            err.line(),
            err.column(),
            format!("invalid JSON: {err}"),
        )
    }

    /// Diagnostic for a template syntax error inside `template`.
    pub fn from_parse_error(key: &str, template: &str, err: &ParseError) -> Self {
        let ParseError::Syntax {
            line,
            column,
            message,
        } = err;
        Self::at_position(key, template, *line, *column, format!("syntax error: {message}"))
    }

    /// Diagnostic for unbalanced brackets in a sentence template.
    pub fn from_expansion_error(line: &str, err: &ExpansionError) -> Self {
        let (position, help) = match err {
            ExpansionError::UnmatchedOpen { position } => {
                (*position, "add a closing ')' for this group")
            }
            ExpansionError::UnmatchedClose { position } => {
                (*position, "remove this ')' or add an opening '('")
            }
        };
        let offset = tokenize(line)
            .iter()
            .take(position)
            .map(String::len)
            .sum::<usize>()
            .min(line.len());
        LingoDiagnostic {
            src: NamedSource::new("sentence".to_string(), line.to_string()),
            span: (offset, 1).into(),
            message: err.to_string(),
            help: Some(help.to_string()),
        }
    }
}
