//! namecase-uk crate root
//!
//! Ukrainian declension for personal names: the language module, its rule
//! set and data file, and one-shot helpers over a shared module instance.
//!
//! Public API exported here:
//! - `Ukrainian` - the `LanguageModule` implementation
//! - `UkrainianEngine` - `namecase_core::Engine` bound to the shared module
//! - `decline_*`, `detect_gender` - one-shot helpers
//! - `cases` - case constants and name lookup

pub mod cases;
pub mod language;
mod rules;

use once_cell::sync::Lazy;

use namecase_core::{CaseOutput, Engine, Gender, Result};

pub use cases::case_index;
pub use language::{Ukrainian, CASE_COUNT, DATA};

/// Engine over the shared Ukrainian module.
pub type UkrainianEngine = Engine<&'static Ukrainian>;

static SHARED: Lazy<Result<Ukrainian>> = Lazy::new(Ukrainian::new);

/// The process-wide module built from the embedded data.
pub fn shared() -> Result<&'static Ukrainian> {
    SHARED.as_ref().map_err(Clone::clone)
}

/// A fresh engine over the shared module.
pub fn engine() -> Result<UkrainianEngine> {
    Ok(Engine::new(shared()?))
}

pub fn decline_given_name(text: &str, case: Option<usize>, gender: Option<Gender>) -> Result<CaseOutput> {
    Ok(Engine::decline_given_name(shared()?, text, case, gender))
}

pub fn decline_family_name(text: &str, case: Option<usize>, gender: Option<Gender>) -> Result<CaseOutput> {
    Ok(Engine::decline_family_name(shared()?, text, case, gender))
}

pub fn decline_patronymic(text: &str, case: Option<usize>, gender: Option<Gender>) -> Result<CaseOutput> {
    Ok(Engine::decline_patronymic(shared()?, text, case, gender))
}

/// Decline a full name keeping its word order.
pub fn decline_full_name(text: &str, case: Option<usize>, gender: Option<Gender>) -> Result<CaseOutput> {
    Ok(Engine::decline_full_name(shared()?, text, case, gender))
}

pub fn detect_gender(text: &str) -> Result<Option<Gender>> {
    Ok(Engine::detect_gender(shared()?, text))
}
