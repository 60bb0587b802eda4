pub mod args;
pub mod context;
pub mod datetime;
pub mod error;
pub mod formatter;
pub mod lang;
pub mod lint;
pub mod parser;
pub mod plural;
pub mod registry;
pub mod resource;
pub mod rules;

#[cfg(feature = "global-context")]
mod global;

pub use args::{FormatArgs, OperationFn};
pub use context::LanguageContext;
pub use datetime::{DateFormatKey, DateTimeData};
pub use error::{FormatError, LoadError, LoadWarning, LookupError, compute_suggestions};
pub use formatter::Formatter;
#[cfg(feature = "global-context")]
pub use global::{default_locale, with_context, with_context_mut};
pub use lint::lint_date_time_config;
pub use plural::{is_singular, plural_category};
pub use registry::{FunctionRegistry, Module, RegistryEntry};
pub use resource::ResourcePaths;
pub use rules::{CascadeRules, NumberFields, RuleCategory, RuleTable, WordTable};

pub use lingo_semantics::{
    DEFAULT_LANGUAGE, ExpansionError, Operation, SUPPORTED_LANGUAGES, default_full_code,
    expand_options, expand_parentheses, is_supported, operation_names, primary_lang_code,
    resolve_operation, tokenize,
};

// Re-export the phrases! macro
pub use lingo_macros::phrases;
