//! Tests for language management, resource lookup, and the data cache.

mod common;

use std::fs;
use std::sync::Arc;

use lingo::{LanguageContext, LoadError, LookupError, ResourcePaths};
use serde_json::json;
use tempfile::TempDir;

// =========================================================================
// Default Language
// =========================================================================

#[test]
fn english_is_default_when_loaded() {
    let context = LanguageContext::builder().languages(&["fr", "en"]).build();
    assert_eq!(context.default_language(), Some("en"));
    assert_eq!(context.default_locale(), Some("en-us"));
    assert_eq!(context.active_languages(), ["fr", "en"]);
}

#[test]
fn first_language_is_default_without_english() {
    let context = LanguageContext::builder().languages(&["fr", "de"]).build();
    assert_eq!(context.default_language(), Some("fr"));
    assert_eq!(context.default_locale(), Some("fr-fr"));
}

#[test]
fn explicit_default_is_loaded_at_the_front() {
    let context = LanguageContext::builder()
        .default_language("pt-br")
        .languages(&["en"])
        .build();
    assert_eq!(context.default_locale(), Some("pt-br"));
    assert_eq!(context.active_languages(), ["pt", "en"]);
}

#[test]
fn first_load_into_empty_set_becomes_default() {
    let mut context = LanguageContext::builder().languages(&[]).build();
    assert_eq!(context.default_language(), None);
    context.load_language("pt-br").unwrap();
    assert_eq!(context.default_language(), Some("pt"));
    assert_eq!(context.default_locale(), Some("pt-br"));
}

#[test]
fn unloading_default_promotes_first_remaining() {
    let mut context = LanguageContext::builder()
        .languages(&["en", "fr", "de"])
        .build();
    context.unload_language("en");
    assert_eq!(context.default_language(), Some("fr"));
    context.unload_languages(&["fr", "de"]);
    assert_eq!(context.default_language(), None);
    assert!(context.active_languages().is_empty());
}

#[test]
fn unloading_english_fails_over_to_spanish() {
    let mut context = LanguageContext::builder().languages(&["en", "es"]).build();
    assert_eq!(context.default_language(), Some("en"));
    context.unload_language("en");
    assert_eq!(context.default_language(), Some("es"));
    assert_eq!(context.full_lang_code(None), "es-es");
}

#[test]
fn set_default_language_inserts_missing_language() {
    let mut context = LanguageContext::builder().languages(&["en", "fr"]).build();
    context.set_default_language("es").unwrap();
    assert_eq!(context.active_languages(), ["es", "en", "fr"]);
    assert_eq!(context.default_locale(), Some("es-es"));

    context.set_default_language("fr").unwrap();
    assert_eq!(context.active_languages(), ["es", "en", "fr"]);
    assert_eq!(context.default_language(), Some("fr"));
}

#[test]
fn set_active_languages_keeps_default_unless_overridden() {
    let mut context = LanguageContext::builder().languages(&["en"]).build();
    context.set_active_languages(&["fr", "en", "fr"], false).unwrap();
    assert_eq!(context.active_languages(), ["fr", "en"]);
    assert_eq!(context.default_language(), Some("en"));

    context.set_active_languages(&["de", "en"], true).unwrap();
    assert_eq!(context.default_language(), Some("de"));

    context.set_active_languages(&["it"], false).unwrap();
    assert_eq!(context.default_language(), Some("it"));
}

#[test]
fn unsupported_languages_are_rejected() {
    let mut context = LanguageContext::builder().languages(&["en"]).build();
    let err = context.load_language("tlh").unwrap_err();
    assert!(matches!(err, LookupError::UnresolvedLanguage { .. }));
    assert!(context.set_default_language("xx-yy").is_err());
    assert_eq!(context.active_languages(), ["en"]);
}

#[test]
fn unsupported_builder_languages_are_skipped() {
    let context = LanguageContext::builder()
        .languages(&["ja", "fr"])
        .build();
    assert_eq!(context.active_languages(), ["fr"]);
}

#[test]
fn language_codes_ignore_case() {
    let mut context = LanguageContext::builder().languages(&["en"]).build();
    context.load_language("FR").unwrap();
    assert_eq!(context.active_languages(), ["en", "fr"]);
    context.set_default_language("De-AT").unwrap();
    assert_eq!(context.default_language(), Some("de"));
    assert_eq!(context.default_locale(), Some("de-at"));
    context.unload_language("DE");
    assert_eq!(context.active_languages(), ["en", "fr"]);
    assert_eq!(context.default_language(), Some("en"));
}

#[test]
fn language_codes_expand_and_reduce() {
    let context = LanguageContext::builder().languages(&["en"]).build();
    assert_eq!(context.full_lang_code(None), "en-us");
    assert_eq!(context.full_lang_code(Some("FR")), "fr-fr");
    assert_eq!(context.full_lang_code(Some("en-AU")), "en-au");
    assert_eq!(context.primary_lang_code(Some("de-at")), "de");
    assert_eq!(context.primary_lang_code(None), "en");
}

// =========================================================================
// Word Resources
// =========================================================================

#[test]
fn bundled_words_are_translated() {
    let context = common::bundled_context(&["en", "fr"]);
    assert_eq!(context.translate_word("minutes", Some("en")), "minutes");
    assert_eq!(context.translate_word("and", Some("fr")), "et");
}

#[test]
fn missing_word_falls_back_to_its_name() {
    let context = common::bundled_context(&["en"]);
    assert_eq!(context.translate_word("fortnight", None), "fortnight");
}

#[test]
fn user_directory_overrides_bundled_words() {
    let user = TempDir::new().unwrap();
    let folder = user.path().join("text").join("en-us");
    fs::create_dir_all(&folder).unwrap();
    fs::write(folder.join("and.word"), "# conjunction\n\n  plus  \n").unwrap();

    let context = LanguageContext::builder()
        .languages(&["en"])
        .resources(ResourcePaths::builder().user_dir(user.path()).build())
        .build();
    assert_eq!(context.translate_word("and", None), "plus");
    assert_eq!(context.translate_word("or", None), "or");
}

#[test]
fn system_directory_is_searched_before_bundled() {
    let system = TempDir::new().unwrap();
    let bundled = TempDir::new().unwrap();
    for (dir, word) in [(&system, "system"), (&bundled, "bundled")] {
        let folder = dir.path().join("text").join("en-us");
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join("day.word"), word).unwrap();
    }
    let paths = ResourcePaths::builder()
        .system_dir(system.path())
        .bundled_dir(bundled.path())
        .build();
    let context = LanguageContext::builder()
        .languages(&["en"])
        .resources(paths)
        .build();
    assert_eq!(context.translate_word("day", None), "system");
}

// =========================================================================
// Date/Time Data Cache
// =========================================================================

#[test]
fn data_is_cached_per_full_code() {
    let context = common::bundled_context(&["en", "fr"]);
    assert!(context.cached_languages().is_empty());
    let first = context.date_time_data(Some("en")).unwrap();
    let second = context.date_time_data(Some("en-us")).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    context.date_time_data(Some("fr")).unwrap();
    assert_eq!(context.cached_languages(), ["en-us", "fr-fr"]);

    context.invalidate("fr");
    assert_eq!(context.cached_languages(), ["en-us"]);
    context.clear_cache();
    assert!(context.cached_languages().is_empty());
}

#[test]
fn missing_language_data_uses_english_under_requested_key() {
    let dir = TempDir::new().unwrap();
    let years = json!({ "default": "{year}" });
    common::write_data(dir.path(), "en-us", &common::data_file(years, json!({})));

    let context = common::context_in(dir.path(), &["en", "de"]);
    let data = context.date_time_data(Some("de")).unwrap();
    assert_eq!(data.language, "en-us");
    assert_eq!(context.cached_languages(), ["de-de"]);
}

#[test]
fn missing_default_data_is_an_error() {
    let dir = TempDir::new().unwrap();
    let context = common::context_in(dir.path(), &["de"]);
    let err = context.date_time_data(Some("de")).unwrap_err();
    assert!(
        matches!(err, LoadError::MissingDefaultData { ref language, .. } if language == "de-de"),
        "{err:?}"
    );
}

#[test]
fn malformed_data_is_not_replaced_by_fallback() {
    let dir = TempDir::new().unwrap();
    let folder = dir.path().join("text").join("fr-fr");
    fs::create_dir_all(&folder).unwrap();
    fs::write(folder.join("date_time.json"), "{ \"decade_format\": ").unwrap();
    let years = json!({ "default": "{year}" });
    common::write_data(dir.path(), "en-us", &common::data_file(years, json!({})));

    let context = common::context_in(dir.path(), &["fr"]);
    let err = context.date_time_data(Some("fr")).unwrap_err();
    assert!(matches!(err, LoadError::Json { .. }), "{err:?}");
    assert!(err.to_string().contains("date_time.json"));
}

#[test]
fn invalid_rule_pattern_names_its_location() {
    let dir = TempDir::new().unwrap();
    let years = json!({
        "1": { "match": "(", "format": "{year}" },
        "default": "{year}"
    });
    common::write_data(dir.path(), "en-us", &common::data_file(years, json!({})));

    let context = common::context_in(dir.path(), &["en"]);
    let err = context.date_time_data(None).unwrap_err();
    let LoadError::InvalidPattern {
        category, index, ..
    } = &err
    else {
        panic!("expected InvalidPattern, got {err:?}");
    };
    assert_eq!(category, "year_format");
    assert_eq!(index, "1");
}

#[test]
fn extra_section_keys_are_ignored() {
    let dir = TempDir::new().unwrap();
    let years = json!({
        "comment": "years read as digit pairs",
        "1": { "match": "\\d{4}", "format": "four digits" },
        "default": "{year}"
    });
    common::write_data(dir.path(), "en-us", &common::data_file(years, json!({})));

    let context = common::context_in(dir.path(), &["en"]);
    let formatter = context.formatter();
    assert_eq!(formatter.pronounce_year(1984, None, false).unwrap(), "four digits");
    assert_eq!(formatter.pronounce_year(84, None, false).unwrap(), "84");
}

#[test]
fn malformed_numbered_rule_names_its_location() {
    let dir = TempDir::new().unwrap();
    let years = json!({ "1": "{year}", "default": "{year}" });
    common::write_data(dir.path(), "en-us", &common::data_file(years, json!({})));

    let context = common::context_in(dir.path(), &["en"]);
    let err = context.date_time_data(None).unwrap_err();
    let LoadError::InvalidRule {
        category, index, ..
    } = &err
    else {
        panic!("expected InvalidRule, got {err:?}");
    };
    assert_eq!(category, "year_format");
    assert_eq!(index, "1");
}

#[test]
fn missing_date_format_entry_is_reported() {
    let dir = TempDir::new().unwrap();
    let mut data = common::data_file(json!({ "default": "{year}" }), json!({}));
    data["date_format"]
        .as_object_mut()
        .unwrap()
        .remove("yesterday");
    common::write_data(dir.path(), "en-us", &data);

    let context = common::context_in(dir.path(), &["en"]);
    let err = context.date_time_data(None).unwrap_err();
    assert!(
        matches!(err, LoadError::MissingSection { ref section, .. } if section == "date_format.yesterday"),
        "{err:?}"
    );
}
