//! Explicit language registry.
//!
//! Modules are registered by the caller (usually the CLI) rather than
//! discovered implicitly. Lookups are case-insensitive and go through an
//! alias table, so `"UA"` and `"ukrainian"` can both reach `"uk"`.

use std::fmt;
use std::sync::Arc;

use ahash::AHashMap;
use tracing::debug;

use crate::config::Config;
use crate::engine::Engine;
use crate::error::{NameCaseError, Result};
use crate::language::LanguageModule;

/// A language module shareable between engines.
pub type SharedLanguage = Arc<dyn LanguageModule + Send + Sync>;

#[derive(Clone, Default)]
pub struct LanguageRegistry {
    modules: AHashMap<String, SharedLanguage>,
    aliases: AHashMap<String, String>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module under its own code and the aliases it declares.
    pub fn register(&mut self, module: SharedLanguage) -> Result<()> {
        let code = module.code().to_lowercase();
        if self.modules.contains_key(&code) {
            return Err(NameCaseError::data(&code, "language registered twice"));
        }
        debug!(language = %code, cases = module.case_count(), "registered language");
        self.aliases.insert(code.clone(), code.clone());
        for alias in module.aliases() {
            self.aliases.insert(alias.to_lowercase(), code.clone());
        }
        self.modules.insert(code, module);
        Ok(())
    }

    /// Make `alias` resolve to the already registered `code`.
    pub fn register_alias(&mut self, alias: &str, code: &str) -> Result<()> {
        let code = self.canonical(code)?.to_string();
        self.aliases.insert(alias.to_lowercase(), code);
        Ok(())
    }

    fn canonical(&self, code: &str) -> Result<&str> {
        self.aliases
            .get(&code.to_lowercase())
            .map(String::as_str)
            .ok_or_else(|| NameCaseError::UnknownLanguage(code.to_string()))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.canonical(code).is_ok()
    }

    pub fn get(&self, code: &str) -> Result<SharedLanguage> {
        let canonical = self.canonical(code)?;
        self.modules
            .get(canonical)
            .cloned()
            .ok_or_else(|| NameCaseError::UnknownLanguage(code.to_string()))
    }

    /// Registered language codes, sorted.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.modules.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Aliases pointing at `code` (the code itself excluded), sorted.
    pub fn aliases_of(&self, code: &str) -> Vec<&str> {
        let mut aliases: Vec<&str> = self
            .aliases
            .iter()
            .filter(|(alias, target)| target.as_str() == code && alias.as_str() != code)
            .map(|(alias, _)| alias.as_str())
            .collect();
        aliases.sort_unstable();
        aliases
    }

    pub fn engine(&self, code: &str) -> Result<Engine<SharedLanguage>> {
        self.engine_with_config(code, Config::default())
    }

    pub fn engine_with_config(&self, code: &str, config: Config) -> Result<Engine<SharedLanguage>> {
        Ok(Engine::with_config(self.get(code)?, config))
    }
}

impl fmt::Debug for LanguageRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageRegistry")
            .field("codes", &self.codes())
            .finish()
    }
}
