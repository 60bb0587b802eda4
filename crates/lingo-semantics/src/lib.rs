//! Shared lingo vocabulary used by both the runtime and the `phrases!` macro.
//!
//! This crate centralizes the supported language set, language-code helpers,
//! the closed operation catalog, and bracket expansion so that compile-time
//! (`lingo-macros`) and runtime (`lingo`) behavior cannot drift apart.

mod expansion;

pub use expansion::{ExpansionError, expand_options, expand_parentheses, tokenize};

/// Primary language codes with formatting support.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "cs", "da", "de", "en", "es", "fr", "hu", "it", "nl", "pt", "sv",
];

/// Full language code used when nothing else is configured.
pub const DEFAULT_LANGUAGE: &str = "en-us";

/// Returns the lowercased primary subtag of a BCP-47 code ("en-US" -> "en").
pub fn primary_lang_code(code: &str) -> String {
    code.split_once('-')
        .map_or(code, |(primary, _)| primary)
        .to_ascii_lowercase()
}

/// Whether the primary subtag of `code` is in [`SUPPORTED_LANGUAGES`].
pub fn is_supported(code: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&primary_lang_code(code).as_str())
}

/// Default full code for a primary language code.
///
/// Returns `None` for codes outside [`SUPPORTED_LANGUAGES`].
pub fn default_full_code(primary: &str) -> Option<&'static str> {
    match primary {
        "cs" => Some("cs-cz"),
        "da" => Some("da-dk"),
        "de" => Some("de-de"),
        "en" => Some("en-us"),
        "es" => Some("es-es"),
        "fr" => Some("fr-fr"),
        "hu" => Some("hu-hu"),
        "it" => Some("it-it"),
        "nl" => Some("nl-nl"),
        "pt" => Some("pt-pt"),
        "sv" => Some("sv-se"),
        _ => None,
    }
}

/// Localized operations dispatched per language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    NiceNumber,
    NiceTime,
    PronounceNumber,
    NiceResponse,
    NiceOrdinal,
    NicePartOfDay,
}

impl Operation {
    /// Every operation in catalog order.
    pub const ALL: [Operation; 6] = [
        Operation::NiceNumber,
        Operation::NiceTime,
        Operation::PronounceNumber,
        Operation::NiceResponse,
        Operation::NiceOrdinal,
        Operation::NicePartOfDay,
    ];

    /// Canonical snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            Operation::NiceNumber => "nice_number",
            Operation::NiceTime => "nice_time",
            Operation::PronounceNumber => "pronounce_number",
            Operation::NiceResponse => "nice_response",
            Operation::NiceOrdinal => "nice_ordinal",
            Operation::NicePartOfDay => "nice_part_of_day",
        }
    }
}

/// Resolve an operation by name. Accepts `-` in place of `_`.
pub fn resolve_operation(name: &str) -> Option<Operation> {
    let canonical = name.replace('-', "_");
    Operation::ALL
        .into_iter()
        .find(|operation| operation.name() == canonical)
}

/// Canonical names of every catalog operation.
///
/// Used for diagnostics and typo suggestions.
pub fn operation_names() -> Vec<&'static str> {
    Operation::ALL.into_iter().map(Operation::name).collect()
}
