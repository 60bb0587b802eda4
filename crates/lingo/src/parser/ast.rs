//! Public AST types for locale templates.
//!
//! These types are public so tooling (the locale lint, the CLI) can inspect
//! which placeholders a template uses.

use std::collections::HashMap;

use crate::error::FormatError;

/// A parsed template string containing segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Template {
    pub segments: Vec<Segment>,
    /// The original template text, kept for error messages.
    pub source: String,
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text (no interpolation).
    Literal(String),
    /// A named placeholder: `{name}`.
    Placeholder(String),
}

/// Named values substituted into a template.
pub type Bindings<'a> = HashMap<&'a str, String>;

impl Template {
    /// Names of every placeholder, in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Substitute every placeholder from `bindings`.
    ///
    /// A placeholder with no binding is a defect in the locale data and is
    /// reported as [`FormatError::UnresolvedPlaceholder`].
    pub fn render(&self, bindings: &Bindings<'_>) -> Result<String, FormatError> {
        let mut output = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder(name) => {
                    let value = bindings.get(name.as_str()).ok_or_else(|| {
                        FormatError::UnresolvedPlaceholder {
                            name: name.clone(),
                            template: self.source.clone(),
                        }
                    })?;
                    output.push_str(value);
                }
            }
        }
        Ok(output)
    }
}
