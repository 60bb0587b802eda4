//! Process-wide context storage for the `global-context` feature.
//!
//! Hosts that cannot thread a `&LanguageContext` through their call sites can
//! share one instance here instead.

use std::sync::{LazyLock, PoisonError, RwLock};

use crate::LanguageContext;

static GLOBAL_CONTEXT: LazyLock<RwLock<LanguageContext>> =
    LazyLock::new(|| RwLock::new(LanguageContext::default()));

/// Provides read access to the global context.
pub fn with_context<T>(f: impl FnOnce(&LanguageContext) -> T) -> T {
    let guard = GLOBAL_CONTEXT
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    f(&guard)
}

/// Provides write access to the global context.
pub fn with_context_mut<T>(f: impl FnOnce(&mut LanguageContext) -> T) -> T {
    let mut guard = GLOBAL_CONTEXT
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// Full code of the global default language.
pub fn default_locale() -> String {
    with_context(|context| context.full_lang_code(None))
}
