//! The Ukrainian language module.

use namecase_core::{
    CharSet, Gender, GenderHeuristics, GenderScores, IrregularTable, LanguageData,
    LanguageModule, NameCaseError, NamePart, PartHeuristics, PartScores, Result, RuleBook, RuleId,
    WorkingWord,
};
use tracing::debug;

use crate::{cases, rules};

/// Embedded language data.
pub const DATA: &str = include_str!("../data/ukrainian.toml");

/// Number of Ukrainian cases, vocative last.
pub const CASE_COUNT: usize = 7;

/// Ukrainian names: seven cases, vocative included.
#[derive(Debug)]
pub struct Ukrainian {
    data: LanguageData,
    rules: RuleBook<Ukrainian>,
    parts: PartHeuristics,
    genders: GenderHeuristics,
    irregular: IrregularTable,
}

impl Ukrainian {
    /// Build the module from the embedded data file.
    pub fn new() -> Result<Self> {
        Self::from_toml_str(DATA)
    }

    /// Build the module from a data file with the same schema.
    ///
    /// Chains are resolved against the Ukrainian rule set here, so unknown
    /// rule names and uncovered (gender, part) pairs are reported now.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let data = LanguageData::from_toml_str(content)?;
        if data.case_count() != CASE_COUNT {
            return Err(NameCaseError::InvalidLanguageData {
                language: data.code.clone(),
                message: format!("expected {CASE_COUNT} cases, found {}", data.case_count()),
            });
        }
        let rules = RuleBook::build(&data.code, rules::all(), &data.chains)?;
        let parts = PartHeuristics::new(data.part_hints.clone());
        let genders = GenderHeuristics::new(data.gender_hints.clone());
        let irregular = IrregularTable::new(&data.irregular);
        debug!(
            language = %data.code,
            rules = rules.len(),
            irregular = irregular.len(),
            "loaded language data"
        );
        Ok(Self {
            data,
            rules,
            parts,
            genders,
            irregular,
        })
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn rules(&self) -> &RuleBook<Ukrainian> {
        &self.rules
    }

    pub(crate) fn irregular(&self) -> &IrregularTable {
        &self.irregular
    }
}

impl LanguageModule for Ukrainian {
    fn code(&self) -> &str {
        &self.data.code
    }

    fn case_count(&self) -> usize {
        CASE_COUNT
    }

    fn vowels(&self) -> &CharSet {
        &self.data.vowels
    }

    fn consonants(&self) -> &CharSet {
        &self.data.consonants
    }

    fn case_names(&self) -> &[String] {
        &self.data.cases
    }

    fn case_index(&self, name: &str) -> Option<usize> {
        cases::case_index(name)
    }

    fn aliases(&self) -> &[String] {
        &self.data.aliases
    }

    fn rule_chain(&self, gender: Gender, part: NamePart) -> &[RuleId] {
        self.rules.chain(gender, part)
    }

    fn apply_rule(&self, rule: RuleId, word: &WorkingWord<'_>) -> Option<Vec<String>> {
        self.rules.apply(self, rule, word)
    }

    fn classify_part(&self, word: &WorkingWord<'_>) -> PartScores {
        self.parts.score(word)
    }

    fn part_priority(&self) -> [NamePart; 3] {
        self.data.part_priority
    }

    fn infer_gender(&self, word: &WorkingWord<'_>, part: NamePart) -> GenderScores {
        self.genders.score(word, part)
    }
}
