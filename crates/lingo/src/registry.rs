//! Registry of localized operation implementations.
//!
//! The registry maps (module, language, operation) to either a function or a
//! not-implemented sentinel. Every populated language has an entry for every
//! operation in its module's catalog.

use std::collections::BTreeMap;

use lingo_semantics::{Operation, SUPPORTED_LANGUAGES, is_supported, primary_lang_code};
use tracing::{debug, warn};

use crate::args::{FormatArgs, OperationFn};
use crate::error::LookupError;
use crate::lang::{GENERIC_NOT_IMPLEMENTED, unit_for};

/// A group of localized operations that is populated as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Module {
    /// Number, time, and response formatting.
    Format,
}

impl Module {
    pub fn name(self) -> &'static str {
        match self {
            Module::Format => "format",
        }
    }

    /// Operations every language must have an entry for.
    pub fn catalog(self) -> &'static [Operation] {
        match self {
            Module::Format => &Operation::ALL,
        }
    }
}

/// What a language provides for one operation.
#[derive(Debug, Clone, Copy)]
pub enum RegistryEntry {
    Implemented(OperationFn),
    NotImplemented { message: &'static str },
}

impl RegistryEntry {
    pub fn is_implemented(&self) -> bool {
        matches!(self, RegistryEntry::Implemented(_))
    }
}

type LanguageTable = BTreeMap<Operation, RegistryEntry>;

/// Localized functions by module, then primary language code.
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    modules: BTreeMap<Module, BTreeMap<String, LanguageTable>>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind every catalog operation of `module` for each language.
    ///
    /// Replaces any previous table for the module, so it can be rerun
    /// whenever the loaded language set changes.
    pub fn populate<S: AsRef<str>>(&mut self, module: Module, languages: &[S]) {
        let mut tables = BTreeMap::new();
        for language in languages {
            let primary = primary_lang_code(language.as_ref());
            let table = language_table(module, &primary);
            tables.insert(primary, table);
        }
        debug!(
            module = module.name(),
            languages = tables.len(),
            "populated function registry"
        );
        self.modules.insert(module, tables);
    }

    /// Repopulate every registered module against `languages`.
    pub fn refresh<S: AsRef<str>>(&mut self, languages: &[S]) {
        let modules: Vec<Module> = self.modules.keys().copied().collect();
        for module in modules {
            self.populate(module, languages);
        }
    }

    pub fn is_registered(&self, module: Module) -> bool {
        self.modules.contains_key(&module)
    }

    /// Registered modules in catalog order.
    pub fn modules(&self) -> impl Iterator<Item = Module> + '_ {
        self.modules.keys().copied()
    }

    /// The raw entry for an operation, if the language is populated.
    pub fn entry(&self, module: Module, language: &str, operation: Operation) -> Option<RegistryEntry> {
        self.modules
            .get(&module)?
            .get(&primary_lang_code(language))?
            .get(&operation)
            .copied()
    }

    /// Find the implementation of `operation` for `language`.
    ///
    /// # Errors
    ///
    /// Checks, in order: the language is supported, the module has been
    /// populated, the language is loaded, and the operation is implemented.
    pub fn resolve(
        &self,
        module: Module,
        operation: Operation,
        language: &str,
    ) -> Result<OperationFn, LookupError> {
        let primary = primary_lang_code(language);
        if !is_supported(&primary) {
            return Err(LookupError::UnresolvedLanguage {
                language: primary,
                supported: SUPPORTED_LANGUAGES.iter().map(ToString::to_string).collect(),
            });
        }
        let tables = self
            .modules
            .get(&module)
            .ok_or_else(|| LookupError::ModuleNotRegistered {
                module: module.name().to_string(),
            })?;
        let table = tables
            .get(&primary)
            .ok_or_else(|| LookupError::LanguageNotLoaded {
                module: module.name().to_string(),
                language: primary.clone(),
            })?;
        let entry = table
            .get(&operation)
            .copied()
            .unwrap_or(RegistryEntry::NotImplemented {
                message: GENERIC_NOT_IMPLEMENTED,
            });
        match entry {
            RegistryEntry::Implemented(function) => Ok(function),
            RegistryEntry::NotImplemented { message } => Err(LookupError::NotLocalized {
                operation: operation.name().to_string(),
                language: primary,
                message: message.to_string(),
            }),
        }
    }

    /// Resolve and invoke `operation` with the shared argument struct.
    pub fn call(
        &self,
        module: Module,
        operation: Operation,
        language: &str,
        args: &FormatArgs,
    ) -> Result<Option<String>, LookupError> {
        let function = self.resolve(module, operation, language)?;
        Ok(function(args))
    }
}

fn language_table(module: Module, primary: &str) -> LanguageTable {
    let unit = unit_for(primary);
    if unit.is_none() {
        warn!(
            module = module.name(),
            language = primary,
            "language is registered but has no implementation unit"
        );
    }
    let message = unit.map_or(GENERIC_NOT_IMPLEMENTED, |unit| unit.not_implemented_message());
    module
        .catalog()
        .iter()
        .map(|&operation| {
            let entry = match unit.and_then(|unit| unit.operation(operation)) {
                Some(function) => RegistryEntry::Implemented(function),
                None => RegistryEntry::NotImplemented { message },
            };
            (operation, entry)
        })
        .collect()
}
