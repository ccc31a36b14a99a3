//! namecase-ru crate root
//!
//! Russian declension for personal names over six cases.
//!
//! Public API exported here:
//! - `Russian` - the `LanguageModule` implementation
//! - `RussianEngine` - `namecase_core::Engine` bound to the shared module
//! - `decline_*`, `detect_gender` - one-shot helpers
//! - `cases` - case constants and name lookup

pub mod cases;
pub mod language;
mod rules;

use once_cell::sync::Lazy;

use namecase_core::{CaseOutput, Engine, Gender, Result};

pub use cases::case_index;
pub use language::{Russian, CASE_COUNT, DATA};

pub type RussianEngine = Engine<&'static Russian>;

static SHARED: Lazy<Result<Russian>> = Lazy::new(Russian::new);

/// The process-wide module built from the embedded data.
pub fn shared() -> Result<&'static Russian> {
    SHARED.as_ref().map_err(Clone::clone)
}

pub fn engine() -> Result<RussianEngine> {
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
