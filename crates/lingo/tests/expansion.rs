//! Tests for bracket expansion through the runtime crate.

mod common;

use lingo::{ExpansionError, phrases};

#[test]
fn formatter_expands_options() {
    let context = common::bundled_context(&["en"]);
    let sentences = context
        .formatter()
        .expand_options("(set|start) a timer for (five|ten) minutes")
        .unwrap();
    insta::assert_snapshot!(sentences.join("\n"), @r"
    set a timer for five minutes
    set a timer for ten minutes
    start a timer for five minutes
    start a timer for ten minutes
    ");
}

#[test]
fn formatter_expands_token_sequences() {
    let context = common::bundled_context(&["en"]);
    let expanded = context
        .formatter()
        .expand_parentheses(&["what", "(", "is", "|", "was", ")", "(", "it", "|", ")"])
        .unwrap();
    let lines: Vec<String> = expanded.iter().map(|tokens| tokens.join(" ")).collect();
    insta::assert_snapshot!(lines.join("\n"), @r"
    what is it
    what is
    what was it
    what was
    ");
}

#[test]
fn formatter_reports_unbalanced_brackets() {
    let context = common::bundled_context(&["en"]);
    let err = context.formatter().expand_options("(a|b").unwrap_err();
    assert_eq!(err, ExpansionError::UnmatchedOpen { position: 0 });
}

#[test]
fn compile_time_expansion_matches_runtime() {
    const LIGHTS: &[&str] = phrases!("turn (on|off) the (light|lamp)");
    let runtime = lingo::expand_options("turn (on|off) the (light|lamp)").unwrap();
    assert_eq!(LIGHTS, runtime.as_slice());
}
