//! Rule book: named declension rules plus the `(gender, part) → chain` table.
//!
//! Language modules implement rules as plain functions and describe chains
//! by rule *name* in their data files. [`RuleBook::build`] resolves the
//! names once, so an unknown or missing reference is reported when the
//! module is registered instead of when a word is declined.

use std::fmt;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{NameCaseError, Result};
use crate::language::{Gender, NamePart, RuleId};
use crate::text::WorkingWord;

/// Signature of a declension rule. Returns the full paradigm on a match.
pub type RuleFn<L> = fn(&L, &WorkingWord<'_>) -> Option<Vec<String>>;

/// One declension rule.
pub struct Rule<L> {
    pub id: RuleId,
    pub name: &'static str,
    pub apply: RuleFn<L>,
}

impl<L> Rule<L> {
    pub const fn new(id: u32, name: &'static str, apply: RuleFn<L>) -> Self {
        Self {
            id: RuleId(id),
            name,
            apply,
        }
    }
}

impl<L> Clone for Rule<L> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            name: self.name,
            apply: self.apply,
        }
    }
}

impl<L> fmt::Debug for Rule<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

/// Rule names per part for one gender, as written in language data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartChains {
    #[serde(default)]
    pub given: Option<Vec<String>>,
    #[serde(default)]
    pub family: Option<Vec<String>>,
    #[serde(default)]
    pub patronymic: Option<Vec<String>>,
}

impl PartChains {
    fn get(&self, part: NamePart) -> Option<&Vec<String>> {
        match part {
            NamePart::Given => self.given.as_ref(),
            NamePart::Family => self.family.as_ref(),
            NamePart::Patronymic => self.patronymic.as_ref(),
        }
    }
}

/// The chain table of a language data file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChainTable {
    #[serde(default)]
    pub masculine: PartChains,
    #[serde(default)]
    pub feminine: PartChains,
}

impl ChainTable {
    pub fn get(&self, gender: Gender, part: NamePart) -> Option<&Vec<String>> {
        match gender {
            Gender::Masculine => self.masculine.get(part),
            Gender::Feminine => self.feminine.get(part),
        }
    }
}

/// Resolved rules and chains for one language.
pub struct RuleBook<L> {
    language: String,
    rules: Vec<Rule<L>>,
    by_id: AHashMap<RuleId, usize>,
    chains: [[Vec<RuleId>; 3]; 2],
}

impl<L> RuleBook<L> {
    /// Resolve `table` against `rules`.
    ///
    /// Fails with `UnknownRuleReference` for a name no rule carries,
    /// `MissingRuleChain` for an uncovered (gender, part) pair, and
    /// `InvalidLanguageData` for duplicate rule ids or names.
    pub fn build(language: &str, rules: Vec<Rule<L>>, table: &ChainTable) -> Result<Self> {
        let mut by_id = AHashMap::with_capacity(rules.len());
        let mut by_name: AHashMap<&'static str, RuleId> = AHashMap::with_capacity(rules.len());
        for (idx, rule) in rules.iter().enumerate() {
            if by_id.insert(rule.id, idx).is_some() {
                return Err(NameCaseError::data(
                    language,
                    format!("duplicate rule id {}", rule.id),
                ));
            }
            if by_name.insert(rule.name, rule.id).is_some() {
                return Err(NameCaseError::data(
                    language,
                    format!("duplicate rule name `{}`", rule.name),
                ));
            }
        }

        let mut chains: [[Vec<RuleId>; 3]; 2] = Default::default();
        for gender in Gender::ALL {
            for part in NamePart::ALL {
                let names = table
                    .get(gender, part)
                    .ok_or_else(|| NameCaseError::MissingRuleChain {
                        language: language.to_string(),
                        gender,
                        part,
                    })?;
                let chain = &mut chains[gender.index()][part.index()];
                for name in names {
                    let id = by_name.get(name.as_str()).copied().ok_or_else(|| {
                        NameCaseError::UnknownRuleReference {
                            language: language.to_string(),
                            rule: name.clone(),
                        }
                    })?;
                    chain.push(id);
                }
            }
        }

        Ok(Self {
            language: language.to_string(),
            rules,
            by_id,
            chains,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn chain(&self, gender: Gender, part: NamePart) -> &[RuleId] {
        &self.chains[gender.index()][part.index()]
    }

    pub fn rule(&self, id: RuleId) -> Option<&Rule<L>> {
        self.by_id.get(&id).map(|idx| &self.rules[*idx])
    }

    pub fn name(&self, id: RuleId) -> Option<&'static str> {
        self.rule(id).map(|r| r.name)
    }

    /// Run rule `id` for `module`. Unknown ids never match.
    pub fn apply(&self, module: &L, id: RuleId, word: &WorkingWord<'_>) -> Option<Vec<String>> {
        self.rule(id).and_then(|rule| (rule.apply)(module, word))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<L> fmt::Debug for RuleBook<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleBook")
            .field("language", &self.language)
            .field("rules", &self.rules)
            .field("chains", &self.chains)
            .finish()
    }
}
