use std::collections::HashSet;

use lingo_semantics::{
    DEFAULT_LANGUAGE, ExpansionError, Operation, SUPPORTED_LANGUAGES, default_full_code,
    expand_options, expand_parentheses, is_supported, operation_names, primary_lang_code,
    resolve_operation, tokenize,
};

// =========================================================================
// Language codes
// =========================================================================

#[test]
fn primary_code_strips_region() {
    assert_eq!(primary_lang_code("en-us"), "en");
    assert_eq!(primary_lang_code("pt-br"), "pt");
    assert_eq!(primary_lang_code("fr"), "fr");
    assert_eq!(primary_lang_code(""), "");
}

#[test]
fn language_codes_ignore_case() {
    assert_eq!(primary_lang_code("EN-US"), "en");
    assert_eq!(primary_lang_code("Fr"), "fr");
    assert!(is_supported("EN"));
    assert!(is_supported("pt-BR"));
    assert!(!is_supported("JA-JP"));
}

#[test]
fn every_supported_language_has_a_default_full_code() {
    for lang in SUPPORTED_LANGUAGES {
        let full = default_full_code(lang).unwrap();
        assert_eq!(primary_lang_code(full), *lang);
    }
    assert_eq!(default_full_code("xx"), None);
}

#[test]
fn support_check_uses_primary_code() {
    assert!(is_supported("en-gb"));
    assert!(is_supported("sv"));
    assert!(!is_supported("ja-jp"));
    assert!(is_supported(DEFAULT_LANGUAGE));
}

// =========================================================================
// Operation catalog
// =========================================================================

#[test]
fn operation_names_round_trip() {
    for operation in Operation::ALL {
        assert_eq!(resolve_operation(operation.name()), Some(operation));
    }
    assert_eq!(
        resolve_operation("pronounce-number"),
        Some(Operation::PronounceNumber)
    );
    assert_eq!(resolve_operation("nice_weather"), None);
}

#[test]
fn operation_names_are_unique() {
    let names: HashSet<&str> = operation_names().into_iter().collect();
    assert_eq!(names.len(), Operation::ALL.len());
}

// =========================================================================
// Bracket expansion
// =========================================================================

#[test]
fn expands_two_groups_into_six_sequences() {
    let tokens = [
        "will", "it", " ", "(", "rain", "|", "pour", ")", " ", "(", "today", "|", "tomorrow",
        "|", "", ")",
    ];
    let expanded = expand_parentheses(&tokens).unwrap();
    assert_eq!(expanded.len(), 6);
    assert_eq!(expanded[0], vec!["will", "it", " ", "rain", " ", "today"]);
    assert!(expanded.contains(&vec![
        "will".to_string(),
        "it".to_string(),
        " ".to_string(),
        "pour".to_string(),
        " ".to_string(),
        String::new(),
    ]));
}

#[test]
fn empty_alternative_contributes_no_tokens() {
    let expanded = expand_parentheses(&["a", "(", "b", "|", ")"]).unwrap();
    assert_eq!(expanded, vec![vec!["a", "b"], vec!["a"]]);
}

#[test]
fn nested_groups_expand_recursively() {
    let sentences = expand_options("(turn|switch) (on|off (the|a) light)").unwrap();
    assert_eq!(
        sentences,
        vec![
            "turn on",
            "turn off the light",
            "turn off a light",
            "switch on",
            "switch off the light",
            "switch off a light",
        ]
    );
}

#[test]
fn single_alternative_group_keeps_brackets() {
    let sentences = expand_options("say (hello)").unwrap();
    assert_eq!(sentences, vec!["say ( hello )"]);
}

#[test]
fn top_level_pipe_splits_sentences() {
    let sentences = expand_options("yes|no").unwrap();
    assert_eq!(sentences, vec!["yes", "no"]);
}

#[test]
fn unmatched_open_reports_its_position() {
    let err = expand_parentheses(&["a", "(", "b", "|", "c"]).unwrap_err();
    assert_eq!(err, ExpansionError::UnmatchedOpen { position: 1 });
    assert_eq!(err.to_string(), "unmatched '(' at token 1");
}

#[test]
fn unmatched_close_reports_its_position() {
    let err = expand_parentheses(&["a", "b", ")"]).unwrap_err();
    assert_eq!(err, ExpansionError::UnmatchedClose { position: 2 });
}

#[test]
fn outer_unclosed_group_is_reported() {
    let err = expand_options("(a|(b|c)").unwrap_err();
    assert_eq!(err, ExpansionError::UnmatchedOpen { position: 0 });
}

#[test]
fn tokenize_isolates_delimiters() {
    assert_eq!(
        tokenize("a(this|that)b"),
        vec!["a", "(", "this", "|", "that", ")", "b"]
    );
    assert_eq!(tokenize("(|)"), vec!["(", "|", ")"]);
}

#[test]
fn expand_options_normalizes_whitespace() {
    let sentences = expand_options("  will   it (rain|pour)  (today|tomorrow|)? ").unwrap();
    assert_eq!(
        sentences,
        vec![
            "will it rain today ?",
            "will it rain tomorrow ?",
            "will it rain ?",
            "will it pour today ?",
            "will it pour tomorrow ?",
            "will it pour ?",
        ]
    );
}
