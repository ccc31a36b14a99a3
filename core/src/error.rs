//! Error type shared by the engine, the registry and language modules.
//!
//! Only programming errors and bad language data surface here. A rule chain
//! that matches nothing is not an error: the identity paradigm is used.

use thiserror::Error;

use crate::language::{Gender, NamePart};

/// Result alias used across namecase crates.
pub type Result<T> = std::result::Result<T, NameCaseError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NameCaseError {
    /// A value that does not satisfy the engine's contract was supplied.
    #[error("contract violation: {0}")]
    ContractViolation(String),

    /// A rule chain names a rule the language module does not implement.
    #[error("language `{language}` references unknown rule `{rule}`")]
    UnknownRuleReference { language: String, rule: String },

    /// The chain table does not cover every (gender, part) combination.
    #[error("language `{language}` has no rule chain for {gender:?} {part:?}")]
    MissingRuleChain {
        language: String,
        gender: Gender,
        part: NamePart,
    },

    /// Language data failed to parse or validate.
    #[error("invalid data for language `{language}`: {message}")]
    InvalidLanguageData { language: String, message: String },

    /// No module is registered under this code.
    #[error("unknown language code: {0}")]
    UnknownLanguage(String),

    /// Configuration could not be loaded or saved.
    #[error("configuration error: {0}")]
    Config(String),
}

impl NameCaseError {
    pub(crate) fn contract(msg: impl Into<String>) -> Self {
        NameCaseError::ContractViolation(msg.into())
    }

    pub(crate) fn data(language: &str, message: impl Into<String>) -> Self {
        NameCaseError::InvalidLanguageData {
            language: language.to_string(),
            message: message.into(),
        }
    }
}
