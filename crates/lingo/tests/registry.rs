//! Tests for localized operation dispatch.

use lingo::{
    FormatArgs, LanguageContext, LookupError, Module, Operation, RegistryEntry,
    SUPPORTED_LANGUAGES,
};

fn number(value: f64) -> FormatArgs {
    FormatArgs::builder().number(value).build()
}

// =========================================================================
// Resolution Order
// =========================================================================

#[test]
fn unloaded_language_is_reported_until_loaded() {
    let mut context = LanguageContext::builder().languages(&["en"]).build();
    let err = context
        .call(Operation::PronounceNumber, Some("fr"), &number(2.0))
        .unwrap_err();
    assert_eq!(
        err,
        LookupError::LanguageNotLoaded {
            module: "format".to_string(),
            language: "fr".to_string(),
        }
    );

    context.load_language("fr").unwrap();
    let spoken = context
        .call(Operation::PronounceNumber, Some("fr"), &number(2.0))
        .unwrap();
    assert_eq!(spoken.as_deref(), Some("deux"));
}

#[test]
fn resolution_ignores_case() {
    let context = LanguageContext::builder().languages(&["en", "fr"]).build();
    let spoken = context
        .call(Operation::PronounceNumber, Some("FR-CA"), &number(2.0))
        .unwrap();
    assert_eq!(spoken.as_deref(), Some("deux"));
    assert!(
        context
            .registry()
            .resolve(Module::Format, Operation::PronounceNumber, "EN")
            .is_ok()
    );
}

#[test]
fn unsupported_language_is_unresolved() {
    let context = LanguageContext::default();
    let err = context
        .call(Operation::NiceNumber, Some("ja-jp"), &number(1.0))
        .unwrap_err();
    let LookupError::UnresolvedLanguage {
        language,
        supported,
    } = &err
    else {
        panic!("expected UnresolvedLanguage, got {err:?}");
    };
    assert_eq!(language, "ja");
    assert_eq!(supported, SUPPORTED_LANGUAGES);
}

#[test]
fn missing_module_is_reported() {
    let context = LanguageContext::builder()
        .languages(&["en"])
        .modules(vec![])
        .build();
    let err = context
        .call(Operation::NiceNumber, None, &number(1.0))
        .unwrap_err();
    assert_eq!(
        err,
        LookupError::ModuleNotRegistered {
            module: "format".to_string(),
        }
    );
}

#[test]
fn registering_a_module_later_populates_it() {
    let mut context = LanguageContext::builder()
        .languages(&["en"])
        .modules(vec![])
        .build();
    assert!(!context.registry().is_registered(Module::Format));
    context.register_module(Module::Format);
    let spoken = context
        .call(Operation::PronounceNumber, None, &number(21.0))
        .unwrap();
    assert_eq!(spoken.as_deref(), Some("twenty one"));
}

// =========================================================================
// Sentinels
// =========================================================================

#[test]
fn every_catalog_operation_has_an_entry() {
    let context = LanguageContext::default();
    for language in SUPPORTED_LANGUAGES {
        for operation in Operation::ALL {
            assert!(
                context
                    .registry()
                    .entry(Module::Format, language, operation)
                    .is_some(),
                "{language} has no entry for {}",
                operation.name()
            );
        }
    }
}

#[test]
fn language_without_unit_is_not_localized() {
    let context = LanguageContext::builder().languages(&["sv"]).build();
    let entry = context
        .registry()
        .entry(Module::Format, "sv-se", Operation::NiceNumber)
        .unwrap();
    assert!(!entry.is_implemented());

    let err = context
        .call(Operation::NiceNumber, Some("sv"), &number(1.0))
        .unwrap_err();
    assert!(err.is_not_localized());
    assert_eq!(
        err.to_string(),
        "nice_number is not localized for 'sv': \
         This function has not been implemented in the specified language."
    );
}

#[test]
fn language_unit_overrides_not_implemented_message() {
    let context = LanguageContext::builder().languages(&["es"]).build();
    let entry = context
        .registry()
        .entry(Module::Format, "es", Operation::NiceTime)
        .unwrap();
    let RegistryEntry::NotImplemented { message } = entry else {
        panic!("es should not implement nice_time");
    };
    assert!(message.contains("español"));
}

#[test]
fn implemented_entries_match_language_units() {
    let context = LanguageContext::default();
    let registry = context.registry();
    let implemented = |language: &str, operation: Operation| {
        registry
            .entry(Module::Format, language, operation)
            .is_some_and(|entry| entry.is_implemented())
    };
    assert!(implemented("en", Operation::NicePartOfDay));
    assert!(implemented("fr", Operation::NiceTime));
    assert!(!implemented("fr", Operation::NiceOrdinal));
    assert!(implemented("de", Operation::NiceResponse));
    assert!(!implemented("de", Operation::NiceTime));
}

// =========================================================================
// Refresh
// =========================================================================

#[test]
fn unloading_removes_the_language_table() {
    let mut context = LanguageContext::builder().languages(&["en", "fr"]).build();
    context.unload_language("fr");
    assert!(
        context
            .registry()
            .entry(Module::Format, "fr", Operation::NiceNumber)
            .is_none()
    );
    let err = context
        .call(Operation::NiceNumber, Some("fr-fr"), &number(1.0))
        .unwrap_err();
    assert!(matches!(err, LookupError::LanguageNotLoaded { .. }));
}

#[test]
fn region_codes_dispatch_to_the_primary_language() {
    let context = LanguageContext::builder().languages(&["en"]).build();
    let spoken = context
        .call(Operation::PronounceNumber, Some("en-GB"), &number(3.0))
        .unwrap();
    assert_eq!(spoken.as_deref(), Some("three"));
}
