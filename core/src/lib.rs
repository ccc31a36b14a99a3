//! namecase-core
//!
//! Language-independent machinery for declining East-Slavic personal names:
//! word records, text helpers, the language-module contract, rule books,
//! table-driven heuristics, templates and the declension engine shared by
//! the language crates (namecase-uk, namecase-ru).
//!
//! Public API:
//! - `Engine` - One name-analysis session: ingest, classify, resolve gender, decline, format
//! - `LanguageModule` - What a language must provide (cases, rule chains, heuristics)
//! - `RuleBook` - Named rules resolved against a language's chain table
//! - `LanguageData` - TOML schema shared by language data files
//! - `LanguageRegistry` - Explicit code → module registry with aliases
//! - `WordRecord` - Per-token state carried through a pass
//! - `Config` - Templates, markers and compound handling

pub mod error;
pub use error::{NameCaseError, Result};

pub mod text;
pub use text::{CharSet, WorkingWord};

pub mod language;
pub use language::{Gender, GenderScores, LanguageModule, NamePart, PartScores, RuleId};

pub mod word;
pub use word::{LetterMask, WordRecord};

pub mod rules;
pub use rules::{ChainTable, PartChains, Rule, RuleBook, RuleFn};

pub mod heuristics;
pub use heuristics::{GenderHeuristics, GenderHint, PartHeuristics, PartHint, WordPattern};

pub mod data;
pub use data::{IrregularEntry, IrregularTable, LanguageData};

pub mod config;
pub use config::Config;

pub mod format;
pub use format::{CaseOutput, Segment, Template};

pub mod engine;
pub use engine::{Engine, RecordId, Stage, TIE_GENDER};

pub mod registry;
pub use registry::{LanguageRegistry, SharedLanguage};
