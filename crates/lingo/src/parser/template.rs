//! Template string parser using winnow.
//!
//! Handles:
//! - Literal text segments
//! - Named placeholders: `{formatted_decade}`
//! - Escape sequences: `{{` and `}}`

use super::ast::{Segment, Template};
use super::error::ParseError;
use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::{none_of, take_while};

/// Parse a template string into an AST.
pub fn parse_template(input: &str) -> Result<Template, ParseError> {
    let mut remaining = input;
    match segments(&mut remaining) {
        Ok(segments) => {
            if remaining.is_empty() {
                Ok(Template {
                    segments,
                    source: input.to_string(),
                })
            } else {
                let (line, column) = calculate_position(input, remaining);
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!(
                        "unexpected character: '{}'",
                        remaining.chars().next().unwrap_or('?')
                    ),
                })
            }
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            Err(ParseError::Syntax {
                line,
                column,
                message: format!("parse error: {e}"),
            })
        }
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed - pos,
        None => consumed_str.chars().count() + 1,
    };
    (line, column)
}

fn segments(input: &mut &str) -> ModalResult<Vec<Segment>> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(merge_literals(segments))
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }
    result
}

fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((escape_sequence, placeholder, literal_char)).parse_next(input)
}

fn escape_sequence(input: &mut &str) -> ModalResult<Segment> {
    alt((
        "{{".value(Segment::Literal("{".to_string())),
        "}}".value(Segment::Literal("}".to_string())),
    ))
    .parse_next(input)
}

fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    none_of(['{', '}'])
        .map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}

/// Parse a placeholder: `{name}`, with optional inner whitespace.
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited(('{', ws), identifier, (ws, '}'))
        .map(|name: &str| Segment::Placeholder(name.to_string()))
        .parse_next(input)
}

fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}

fn identifier<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_only() {
        let t = parse_template("hundred").unwrap();
        assert_eq!(t.segments, vec![Segment::Literal("hundred".to_string())]);
    }

    #[test]
    fn placeholders_between_literals() {
        let t = parse_template("{x_in_x00} hundred {formatted_decade}").unwrap();
        assert_eq!(
            t.placeholders().collect::<Vec<_>>(),
            vec!["x_in_x00", "formatted_decade"]
        );
        assert_eq!(t.segments.len(), 3);
    }

    #[test]
    fn braces_escape() {
        let t = parse_template("{{literal}}").unwrap();
        assert_eq!(t.segments, vec![Segment::Literal("{literal}".to_string())]);
    }

    #[test]
    fn unterminated_placeholder_reports_position() {
        let err = parse_template("{x0} {x").unwrap_err();
        let ParseError::Syntax { line, column, .. } = err;
        assert_eq!((line, column), (1, 6));
    }

    #[test]
    fn stray_close_brace_is_rejected() {
        assert!(parse_template("a } b").is_err());
    }
}
