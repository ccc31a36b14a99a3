//! Language-module contract.
//!
//! The engine knows nothing about suffixes or exception lists. Everything
//! language-specific is reached through [`LanguageModule`], implemented by
//! `namecase-uk` and `namecase-ru` (and by test doubles).

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::text::{CharSet, WorkingWord};

/// Grammatical gender of a full name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculine,
    Feminine,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Masculine, Gender::Feminine];

    pub(crate) fn index(self) -> usize {
        match self {
            Gender::Masculine => 0,
            Gender::Feminine => 1,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Masculine => f.write_str("masculine"),
            Gender::Feminine => f.write_str("feminine"),
        }
    }
}

/// Anthroponym part a token plays in a full name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamePart {
    Given,
    Family,
    Patronymic,
}

impl NamePart {
    pub const ALL: [NamePart; 3] = [NamePart::Given, NamePart::Family, NamePart::Patronymic];

    pub(crate) fn index(self) -> usize {
        match self {
            NamePart::Given => 0,
            NamePart::Family => 1,
            NamePart::Patronymic => 2,
        }
    }
}

impl fmt::Display for NamePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamePart::Given => f.write_str("given"),
            NamePart::Family => f.write_str("family"),
            NamePart::Patronymic => f.write_str("patronymic"),
        }
    }
}

/// Identifier of the rule that produced a paradigm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RuleId(pub u32);

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-part likelihood scores produced by part classification.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PartScores {
    pub given: f32,
    pub family: f32,
    pub patronymic: f32,
}

impl PartScores {
    pub fn get(&self, part: NamePart) -> f32 {
        match part {
            NamePart::Given => self.given,
            NamePart::Family => self.family,
            NamePart::Patronymic => self.patronymic,
        }
    }

    pub fn add(&mut self, part: NamePart, weight: f32) {
        match part {
            NamePart::Given => self.given += weight,
            NamePart::Family => self.family += weight,
            NamePart::Patronymic => self.patronymic += weight,
        }
    }

    /// Highest-scoring part. Ties go to whichever part comes first in
    /// `priority`.
    pub fn winner(&self, priority: &[NamePart; 3]) -> NamePart {
        let max = NamePart::ALL
            .iter()
            .map(|p| self.get(*p))
            .fold(f32::MIN, f32::max);
        priority
            .iter()
            .copied()
            .find(|p| self.get(*p) == max)
            .unwrap_or(priority[0])
    }
}

/// Gender evidence increments for one word.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GenderScores {
    pub masculine: f32,
    pub feminine: f32,
}

impl GenderScores {
    pub fn new(masculine: f32, feminine: f32) -> Self {
        Self {
            masculine,
            feminine,
        }
    }
}

/// Operations a language must provide to the declension engine.
///
/// Implementations are expected to validate their rule chains when they
/// are constructed, so `rule_chain` only ever hands out ids that
/// `apply_rule` understands.
pub trait LanguageModule {
    /// Language code, e.g. `"uk"`.
    fn code(&self) -> &str;

    /// Number of grammatical cases; index 0 is the nominative.
    fn case_count(&self) -> usize;

    fn vowels(&self) -> &CharSet;

    fn consonants(&self) -> &CharSet;

    /// Human-readable case names, in case-index order.
    fn case_names(&self) -> &[String] {
        &[]
    }

    /// Case index for a case name, matched case-insensitively against
    /// `case_names`.
    fn case_index(&self, name: &str) -> Option<usize> {
        let name = name.to_lowercase();
        self.case_names()
            .iter()
            .position(|case| case.to_lowercase() == name)
    }

    /// Other codes the language may be looked up by.
    fn aliases(&self) -> &[String] {
        &[]
    }

    /// Ordered rule ids to try for a (gender, part) pair.
    fn rule_chain(&self, gender: Gender, part: NamePart) -> &[RuleId];

    /// Run one rule against the working word.
    ///
    /// Returns `None` when the rule does not match, otherwise the full
    /// paradigm (`case_count` forms, nominative first).
    fn apply_rule(&self, rule: RuleId, word: &WorkingWord<'_>) -> Option<Vec<String>>;

    /// Evidence for each anthroponym part.
    fn classify_part(&self, word: &WorkingWord<'_>) -> PartScores;

    /// Tie-break order for `classify_part` scores.
    fn part_priority(&self) -> [NamePart; 3] {
        [NamePart::Given, NamePart::Family, NamePart::Patronymic]
    }

    /// Gender evidence for a word already known to be `part`.
    fn infer_gender(&self, word: &WorkingWord<'_>, part: NamePart) -> GenderScores;
}

macro_rules! forward_language_module {
    ($($ptr:ty),*) => {$(
        impl<L: LanguageModule + ?Sized> LanguageModule for $ptr {
            fn code(&self) -> &str {
                (**self).code()
            }
            fn case_count(&self) -> usize {
                (**self).case_count()
            }
            fn vowels(&self) -> &CharSet {
                (**self).vowels()
            }
            fn consonants(&self) -> &CharSet {
                (**self).consonants()
            }
            fn case_names(&self) -> &[String] {
                (**self).case_names()
            }
            fn case_index(&self, name: &str) -> Option<usize> {
                (**self).case_index(name)
            }
            fn aliases(&self) -> &[String] {
                (**self).aliases()
            }
            fn rule_chain(&self, gender: Gender, part: NamePart) -> &[RuleId] {
                (**self).rule_chain(gender, part)
            }
            fn apply_rule(&self, rule: RuleId, word: &WorkingWord<'_>) -> Option<Vec<String>> {
                (**self).apply_rule(rule, word)
            }
            fn classify_part(&self, word: &WorkingWord<'_>) -> PartScores {
                (**self).classify_part(word)
            }
            fn part_priority(&self) -> [NamePart; 3] {
                (**self).part_priority()
            }
            fn infer_gender(&self, word: &WorkingWord<'_>, part: NamePart) -> GenderScores {
                (**self).infer_gender(word, part)
            }
        }
    )*};
}

forward_language_module!(&L, Box<L>, Arc<L>);

#[cfg(test)]
mod tests {
    use super::*;

    const PRIORITY: [NamePart; 3] = [NamePart::Given, NamePart::Family, NamePart::Patronymic];

    #[test]
    fn test_winner_highest_score() {
        let scores = PartScores {
            given: 0.0,
            family: 0.4,
            patronymic: 3.0,
        };
        assert_eq!(scores.winner(&PRIORITY), NamePart::Patronymic);
    }

    #[test]
    fn test_winner_tie_uses_priority() {
        let scores = PartScores {
            given: 1.0,
            family: 1.0,
            patronymic: 0.0,
        };
        assert_eq!(scores.winner(&PRIORITY), NamePart::Given);

        let reversed = [NamePart::Patronymic, NamePart::Family, NamePart::Given];
        assert_eq!(scores.winner(&reversed), NamePart::Family);

        assert_eq!(PartScores::default().winner(&reversed), NamePart::Patronymic);
    }

    #[test]
    fn test_add_scores() {
        let mut scores = PartScores::default();
        scores.add(NamePart::Family, 0.5);
        scores.add(NamePart::Family, 0.25);
        assert_eq!(scores.get(NamePart::Family), 0.75);
    }
}
