//! CLDR plural categories for unit words.
//!
//! Duration phrases pick between singular and plural resource words ("day" or
//! "days") by the cardinal plural category of the count. Rules are cached per
//! thread per language.

use std::cell::RefCell;

use icu_locale_core::locale;
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};
use lingo_semantics::{SUPPORTED_LANGUAGES, primary_lang_code};
use tracing::debug;

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by primary language code.
    static PLURAL_RULES_CACHE: RefCell<Vec<(&'static str, PluralRules)>> = const { RefCell::new(Vec::new()) };
}

/// Map a language code onto a supported primary code, or `"en"`.
fn normalize_lang(lang: &str) -> &'static str {
    let primary = primary_lang_code(lang);
    SUPPORTED_LANGUAGES
        .iter()
        .find(|&&code| code == primary)
        .copied()
        .unwrap_or("en")
}

fn build_rules(lang: &'static str) -> Option<PluralRules> {
    let loc = match lang {
        "cs" => locale!("cs"),
        "da" => locale!("da"),
        "de" => locale!("de"),
        "es" => locale!("es"),
        "fr" => locale!("fr"),
        "hu" => locale!("hu"),
        "it" => locale!("it"),
        "nl" => locale!("nl"),
        "pt" => locale!("pt"),
        "sv" => locale!("sv"),
        _ => locale!("en"),
    };
    match PluralRules::try_new(loc.into(), PluralRuleType::Cardinal.into()) {
        Ok(rules) => Some(rules),
        Err(error) => {
            debug!(lang, %error, "plural rules unavailable");
            None
        }
    }
}

fn category_str(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

/// Get the CLDR plural category for `n` in `lang`.
///
/// Returns one of "zero", "one", "two", "few", "many", "other". When no
/// rules can be built, 1 is "one" and everything else "other".
///
/// ```
/// use lingo::plural_category;
///
/// assert_eq!(plural_category("en-us", 1), "one");
/// assert_eq!(plural_category("en", 2), "other");
/// assert_eq!(plural_category("fr", 0), "one");
/// assert_eq!(plural_category("cs", 3), "few");
/// ```
pub fn plural_category(lang: &str, n: u64) -> &'static str {
    let lang = normalize_lang(lang);
    PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
        if let Some((_, rules)) = cache.iter().find(|(code, _)| *code == lang) {
            return category_str(rules.category_for(n));
        }
        match build_rules(lang) {
            Some(rules) => {
                let category = category_str(rules.category_for(n));
                cache.push((lang, rules));
                category
            }
            None if n == 1 => "one",
            None => "other",
        }
    })
}

/// Whether `n` takes the singular form in `lang`.
pub fn is_singular(lang: &str, n: u64) -> bool {
    plural_category(lang, n) == "one"
}
