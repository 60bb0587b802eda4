//! Compile-time expansion and validation for the phrases! macro.
//!
//! Expands every literal through the shared runtime algorithm and reports:
//! 1. Unbalanced brackets, at the literal that contains them
//! 2. Phrasings produced more than once across all literals

use std::collections::HashSet;

use lingo_semantics::expand_options;

use crate::input::MacroInput;

/// Expand all sentences, collecting every error instead of stopping at the first.
pub fn expand_all(input: &MacroInput) -> syn::Result<Vec<String>> {
    let mut phrases = Vec::new();
    let mut seen = HashSet::new();
    let mut errors: Option<syn::Error> = None;

    for sentence in &input.sentences {
        let expanded = match expand_options(&sentence.text) {
            Ok(expanded) => expanded,
            Err(e) => {
                push_error(
                    &mut errors,
                    syn::Error::new(sentence.span, format!("{e} in \"{}\"", sentence.text)),
                );
                continue;
            }
        };
        for phrase in expanded {
            if seen.insert(phrase.clone()) {
                phrases.push(phrase);
            } else {
                push_error(
                    &mut errors,
                    syn::Error::new(
                        sentence.span,
                        format!("phrase \"{phrase}\" is produced more than once"),
                    ),
                );
            }
        }
    }

    match errors {
        Some(e) => Err(e),
        None => Ok(phrases),
    }
}

fn push_error(errors: &mut Option<syn::Error>, error: syn::Error) {
    match errors {
        Some(existing) => existing.combine(error),
        None => *errors = Some(error),
    }
}

#[cfg(test)]
mod tests {
    use proc_macro2::Span;

    use super::*;
    use crate::input::SpannedSentence;

    fn input(sentences: &[&str]) -> MacroInput {
        MacroInput {
            sentences: sentences
                .iter()
                .map(|text| SpannedSentence {
                    text: (*text).to_string(),
                    span: Span::call_site(),
                })
                .collect(),
        }
    }

    #[test]
    fn expands_every_literal_in_order() {
        let phrases = expand_all(&input(&["(hi|hello) there", "good (morning|night)"])).unwrap();
        assert_eq!(
            phrases,
            vec!["hi there", "hello there", "good morning", "good night"]
        );
    }

    #[test]
    fn reports_unbalanced_brackets() {
        let err = expand_all(&input(&["will it (rain|pour"])).unwrap_err();
        assert!(err.to_string().contains("unmatched '('"));
    }

    #[test]
    fn reports_duplicate_phrasings() {
        let err = expand_all(&input(&["(a|a) b"])).unwrap_err();
        assert!(err.to_string().contains("\"a b\" is produced more than once"));
    }
}
