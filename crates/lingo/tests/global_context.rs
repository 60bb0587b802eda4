//! Tests for the process-wide context behind the `global-context` feature.
#![cfg(feature = "global-context")]

use lingo::{FormatArgs, Operation, default_locale, with_context, with_context_mut};

#[test]
fn global_context_is_shared_and_mutable() {
    with_context_mut(|context| {
        context.set_active_languages(&["fr", "en"], true).unwrap();
    });
    assert_eq!(default_locale(), "fr-fr");

    let spoken = with_context(|context| {
        context.call(
            Operation::PronounceNumber,
            None,
            &FormatArgs::builder().number(2.0).build(),
        )
    })
    .unwrap();
    assert_eq!(spoken.as_deref(), Some("deux"));

    with_context_mut(|context| context.set_default_language("en").unwrap());
    assert_eq!(default_locale(), "en-us");
}
