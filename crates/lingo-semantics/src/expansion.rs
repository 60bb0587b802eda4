//! Bracket alternation expansion.
//!
//! Expands `(a|b)` groups in a token sequence into every concrete phrasing.
//! Groups nest, an empty alternative contributes no tokens, and a group with
//! a single alternative keeps its brackets as literal tokens.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::mem;

const OPEN: &str = "(";
const CLOSE: &str = ")";
const BAR: &str = "|";

/// An error raised for unbalanced brackets.
///
/// Positions are token indices into the sequence passed to
/// [`expand_parentheses`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpansionError {
    /// An opening bracket that is never closed.
    UnmatchedOpen { position: usize },
    /// A closing bracket with no opening bracket before it.
    UnmatchedClose { position: usize },
}

impl Display for ExpansionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ExpansionError::UnmatchedOpen { position } => {
                write!(f, "unmatched '(' at token {position}")
            }
            ExpansionError::UnmatchedClose { position } => {
                write!(f, "unmatched ')' at token {position}")
            }
        }
    }
}

impl Error for ExpansionError {}

/// A node of the parsed alternation tree.
#[derive(Debug)]
enum Fragment {
    Word(String),
    Options(Vec<Vec<Fragment>>),
}

impl Fragment {
    fn expand(&self) -> Vec<Vec<String>> {
        match self {
            Fragment::Word(word) => vec![vec![word.clone()]],
            Fragment::Options(alternatives) => alternatives
                .iter()
                .flat_map(|sequence| expand_sequence(sequence))
                .collect(),
        }
    }
}

/// Cartesian product of a fragment sequence, left to right.
fn expand_sequence(fragments: &[Fragment]) -> Vec<Vec<String>> {
    let mut expanded: Vec<Vec<String>> = vec![Vec::new()];
    for fragment in fragments {
        let choices = fragment.expand();
        expanded = expanded
            .iter()
            .flat_map(|prefix| {
                choices.iter().map(move |choice| {
                    let mut sentence = prefix.clone();
                    sentence.extend(choice.iter().cloned());
                    sentence
                })
            })
            .collect();
    }
    expanded
}

/// Recursive-descent parser over an already-split token slice.
struct TreeParser<'a, S> {
    tokens: &'a [S],
    position: usize,
}

impl<S: AsRef<str>> TreeParser<'_, S> {
    /// Parse alternatives until the closing bracket of the group opened at
    /// `opened_at`, or until end of input for the top level.
    fn parse_group(
        &mut self,
        opened_at: Option<usize>,
    ) -> Result<Vec<Vec<Fragment>>, ExpansionError> {
        let mut alternatives = Vec::new();
        let mut current = Vec::new();
        while let Some(token) = self.tokens.get(self.position) {
            let index = self.position;
            self.position += 1;
            match token.as_ref() {
                OPEN => {
                    let group = self.parse_group(Some(index))?;
                    if group.len() == 1 {
                        current.push(Fragment::Word(OPEN.to_string()));
                        current.push(Fragment::Options(group));
                        current.push(Fragment::Word(CLOSE.to_string()));
                    } else {
                        current.push(Fragment::Options(group));
                    }
                }
                BAR => alternatives.push(mem::take(&mut current)),
                CLOSE => {
                    if opened_at.is_none() {
                        return Err(ExpansionError::UnmatchedClose { position: index });
                    }
                    alternatives.push(current);
                    return Ok(alternatives);
                }
                word => current.push(Fragment::Word(word.to_string())),
            }
        }
        if let Some(position) = opened_at {
            return Err(ExpansionError::UnmatchedOpen { position });
        }
        alternatives.push(current);
        Ok(alternatives)
    }
}

/// Expand every bracket group in `tokens`.
///
/// Brackets and pipes must already be isolated as their own tokens (see
/// [`tokenize`]). Returns one token sequence per combination, in the order
/// the alternatives are written.
///
/// # Example
///
/// ```
/// use lingo_semantics::expand_parentheses;
///
/// let tokens = ["1", "(", "2", "|", "3", ")"];
/// let expanded = expand_parentheses(&tokens).unwrap();
/// assert_eq!(expanded, vec![vec!["1", "2"], vec!["1", "3"]]);
/// ```
pub fn expand_parentheses<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Vec<String>>, ExpansionError> {
    let mut parser = TreeParser {
        tokens,
        position: 0,
    };
    let top = parser.parse_group(None)?;
    Ok(Fragment::Options(top).expand())
}

/// Split a line around `(`, `|` and `)`, keeping the delimiters as tokens.
///
/// Empty text between adjacent delimiters is dropped.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for c in line.chars() {
        if matches!(c, '(' | '|' | ')') {
            if !current.is_empty() {
                tokens.push(mem::take(&mut current));
            }
            tokens.push(c.to_string());
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Expand a bracketed line into whitespace-normalized sentences.
///
/// # Example
///
/// ```
/// use lingo_semantics::expand_options;
///
/// let sentences = expand_options("test (a|b)").unwrap();
/// assert_eq!(sentences, vec!["test a", "test b"]);
/// ```
pub fn expand_options(line: &str) -> Result<Vec<String>, ExpansionError> {
    let tokens = tokenize(line);
    Ok(expand_parentheses(&tokens)?
        .iter()
        .map(|sentence| {
            sentence
                .join(" ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect())
}
