//! The caller-owned language state: loaded languages, default language,
//! function registry, and the date/time data cache.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use bon::bon;
use lingo_semantics::{DEFAULT_LANGUAGE, Operation, default_full_code, is_supported, primary_lang_code};
use tracing::{debug, warn};

use crate::args::FormatArgs;
use crate::datetime::{DATE_TIME_FILE, DateTimeData, load_file};
use crate::error::{LoadError, LookupError};
use crate::formatter::Formatter;
use crate::registry::{FunctionRegistry, Module};
use crate::resource::ResourcePaths;

/// Active languages and everything derived from them.
///
/// Changing the loaded set or the default language repopulates the function
/// registry for every registered module. Date/time data is loaded on first
/// use per language and kept until [`invalidate`](Self::invalidate) or
/// [`clear_cache`](Self::clear_cache).
///
/// # Example
///
/// ```
/// use lingo::LanguageContext;
///
/// let mut context = LanguageContext::builder().languages(&["en"]).build();
/// assert_eq!(context.default_language(), Some("en"));
///
/// context.load_language("fr").unwrap();
/// assert_eq!(context.active_languages(), ["en", "fr"]);
/// ```
#[derive(Debug)]
pub struct LanguageContext {
    /// Default locale as a full code ("en-us"); `None` when nothing is loaded.
    default_locale: Option<String>,
    /// Loaded primary codes in load order.
    loaded: Vec<String>,
    resources: ResourcePaths,
    registry: FunctionRegistry,
    date_time_cache: RwLock<HashMap<String, Arc<DateTimeData>>>,
}

impl Default for LanguageContext {
    fn default() -> Self {
        LanguageContext::builder().build()
    }
}

#[bon]
impl LanguageContext {
    /// Build a context.
    ///
    /// `languages` defaults to every supported language. The default
    /// language is `en-us` when English is loaded, otherwise the first
    /// loaded language. `modules` defaults to [`Module::Format`].
    #[builder]
    pub fn new(
        #[builder(into)] default_language: Option<String>,
        languages: Option<&[&str]>,
        #[builder(default)] resources: ResourcePaths,
        #[builder(default = vec![Module::Format])] modules: Vec<Module>,
    ) -> Self {
        let mut loaded: Vec<String> = Vec::new();
        for language in languages.unwrap_or(lingo_semantics::SUPPORTED_LANGUAGES) {
            if !is_supported(language) {
                warn!(language, "ignoring unsupported language");
                continue;
            }
            let primary = primary_lang_code(language);
            if !loaded.contains(&primary) {
                loaded.push(primary);
            }
        }

        let default_locale = match default_language {
            Some(language) if is_supported(&language) => Some(expand_code(&language)),
            _ if loaded.contains(&primary_lang_code(DEFAULT_LANGUAGE)) => {
                Some(DEFAULT_LANGUAGE.to_string())
            }
            _ => loaded.first().map(|primary| expand_code(primary)),
        };

        let mut context = Self {
            default_locale,
            loaded,
            resources,
            registry: FunctionRegistry::new(),
            date_time_cache: RwLock::new(HashMap::new()),
        };
        if let Some(default) = context.default_locale.clone() {
            context.insert_default(&default);
        }
        for module in modules {
            context.register_module(module);
        }
        context
    }
}

impl LanguageContext {
    // =========================================================================
    // Registry
    // =========================================================================

    /// Populate `module` for the loaded languages.
    pub fn register_module(&mut self, module: Module) {
        self.registry.populate(module, &self.loaded);
    }

    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    pub fn resources(&self) -> &ResourcePaths {
        &self.resources
    }

    /// Invoke a localized format operation.
    ///
    /// `language` defaults to the default language.
    pub fn call(
        &self,
        operation: Operation,
        language: Option<&str>,
        args: &FormatArgs,
    ) -> Result<Option<String>, LookupError> {
        let language = self.full_lang_code(language);
        self.registry.call(Module::Format, operation, &language, args)
    }

    /// Convenience operations borrowing this context.
    pub fn formatter(&self) -> Formatter<'_> {
        Formatter::new(self)
    }

    fn refresh(&mut self) {
        debug!(languages = ?self.loaded, "refreshing function registry");
        self.registry.refresh(&self.loaded);
    }

    // =========================================================================
    // Language Management
    // =========================================================================

    /// Loaded primary language codes, in load order.
    pub fn active_languages(&self) -> &[String] {
        &self.loaded
    }

    /// Primary code of the default language.
    pub fn default_language(&self) -> Option<&str> {
        // The stored locale is already lowercase.
        self.default_locale
            .as_deref()
            .map(|locale| locale.split_once('-').map_or(locale, |(primary, _)| primary))
    }

    /// Full code of the default language.
    pub fn default_locale(&self) -> Option<&str> {
        self.default_locale.as_deref()
    }

    /// Append a language to the loaded set.
    ///
    /// The first language loaded into an empty set becomes the default.
    pub fn load_language(&mut self, language: &str) -> Result<(), LookupError> {
        self.insert_language(language)?;
        self.refresh();
        Ok(())
    }

    pub fn load_languages<S: AsRef<str>>(&mut self, languages: &[S]) -> Result<(), LookupError> {
        for language in languages {
            self.insert_language(language.as_ref())?;
        }
        self.refresh();
        Ok(())
    }

    /// Remove a language from the loaded set.
    ///
    /// Unloading the default makes the first remaining language the default.
    pub fn unload_language(&mut self, language: &str) {
        self.remove_language(language);
        self.refresh();
    }

    pub fn unload_languages<S: AsRef<str>>(&mut self, languages: &[S]) {
        for language in languages {
            self.remove_language(language.as_ref());
        }
        self.refresh();
    }

    /// Replace the loaded set.
    ///
    /// Duplicates are dropped keeping the first occurrence. The first entry
    /// becomes the default when `override_default` is set or the current
    /// default is no longer loaded.
    pub fn set_active_languages<S: AsRef<str>>(
        &mut self,
        languages: &[S],
        override_default: bool,
    ) -> Result<(), LookupError> {
        let mut loaded: Vec<String> = Vec::new();
        for language in languages {
            let language = language.as_ref();
            check_supported(language)?;
            let primary = primary_lang_code(language);
            if !loaded.contains(&primary) {
                loaded.push(primary);
            }
        }
        self.loaded = loaded;
        let default_missing = self
            .default_language()
            .is_none_or(|default| !self.loaded.iter().any(|l| l == default));
        if override_default || default_missing {
            self.default_locale = self.loaded.first().map(|primary| expand_code(primary));
        }
        self.refresh();
        Ok(())
    }

    /// Make `language` the default, loading it first if needed.
    pub fn set_default_language(&mut self, language: &str) -> Result<(), LookupError> {
        check_supported(language)?;
        let locale = expand_code(language);
        self.insert_default(&locale);
        self.default_locale = Some(locale);
        self.refresh();
        Ok(())
    }

    /// Full code for `language`, or for the default when `None`.
    ///
    /// A bare primary code expands to its default region ("en" to "en-us").
    pub fn full_lang_code(&self, language: Option<&str>) -> String {
        match language.or(self.default_locale.as_deref()) {
            Some(language) => expand_code(language),
            None => DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Primary code for `language`, or for the default when `None`.
    pub fn primary_lang_code(&self, language: Option<&str>) -> String {
        primary_lang_code(&self.full_lang_code(language))
    }

    fn insert_language(&mut self, language: &str) -> Result<(), LookupError> {
        check_supported(language)?;
        let primary = primary_lang_code(language);
        if !self.loaded.contains(&primary) {
            self.loaded.push(primary);
        }
        if self.default_locale.is_none() {
            self.default_locale = Some(expand_code(language));
        }
        Ok(())
    }

    fn insert_default(&mut self, locale: &str) {
        let primary = primary_lang_code(locale);
        if !self.loaded.contains(&primary) {
            self.loaded.insert(0, primary);
        }
    }

    fn remove_language(&mut self, language: &str) {
        let primary = primary_lang_code(language);
        self.loaded.retain(|loaded| *loaded != primary);
        if self.default_language() == Some(primary.as_str()) {
            self.default_locale = self.loaded.first().map(|first| expand_code(first));
        }
    }

    // =========================================================================
    // Resources
    // =========================================================================

    /// Localized word for `name`, or `name` itself when no word file exists.
    pub fn translate_word(&self, name: &str, language: Option<&str>) -> String {
        let full = self.full_lang_code(language);
        self.resources
            .read_word(&full, name)
            .unwrap_or_else(|| name.to_string())
    }

    /// Date/time data for `language`, loading and caching it on first use.
    ///
    /// A language without its own data file uses the `en-us` data, cached
    /// under the requested language.
    pub fn date_time_data(&self, language: Option<&str>) -> Result<Arc<DateTimeData>, LoadError> {
        let full = self.full_lang_code(language);
        if let Some(data) = self
            .date_time_cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&full)
        {
            return Ok(Arc::clone(data));
        }
        let data = Arc::new(self.load_date_time(&full)?);
        self.date_time_cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(full, Arc::clone(&data));
        Ok(data)
    }

    fn load_date_time(&self, full: &str) -> Result<DateTimeData, LoadError> {
        let resource = Path::new("text").join(full).join(DATE_TIME_FILE);
        if let Some(path) = self.resources.resolve(&resource) {
            debug!(language = full, path = %path.display(), "loading date/time data");
            return load_file(&path, full);
        }
        warn!(
            language = full,
            fallback = DEFAULT_LANGUAGE,
            "no date/time data for language, using default"
        );
        let fallback = Path::new("text").join(DEFAULT_LANGUAGE).join(DATE_TIME_FILE);
        let path = self
            .resources
            .resolve(&fallback)
            .ok_or_else(|| LoadError::MissingDefaultData {
                file: DATE_TIME_FILE.to_string(),
                language: full.to_string(),
            })?;
        load_file(&path, DEFAULT_LANGUAGE)
    }

    /// Drop cached date/time data for one language.
    pub fn invalidate(&self, language: &str) {
        let full = expand_code(language);
        self.date_time_cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&full);
    }

    /// Drop all cached date/time data.
    pub fn clear_cache(&self) {
        self.date_time_cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Languages with cached date/time data, sorted.
    pub fn cached_languages(&self) -> Vec<String> {
        let cache = self
            .date_time_cache
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let mut languages: Vec<String> = cache.keys().cloned().collect();
        languages.sort();
        languages
    }
}

/// Expand a bare primary code to its default full code and lowercase it.
fn expand_code(language: &str) -> String {
    let language = language.to_lowercase();
    if language.contains('-') {
        return language;
    }
    default_full_code(&language).map_or(language, ToString::to_string)
}

fn check_supported(language: &str) -> Result<(), LookupError> {
    if is_supported(language) {
        Ok(())
    } else {
        Err(LookupError::UnresolvedLanguage {
            language: language.to_string(),
            supported: lingo_semantics::SUPPORTED_LANGUAGES
                .iter()
                .map(ToString::to_string)
                .collect(),
        })
    }
}
