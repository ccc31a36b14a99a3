//! The Russian language module.

use namecase_core::{
    CharSet, Gender, GenderHeuristics, GenderScores, IrregularTable, LanguageData,
    LanguageModule, NameCaseError, NamePart, PartHeuristics, PartScores, Result, RuleBook, RuleId,
    WorkingWord,
};
use tracing::debug;

use crate::{cases, rules};

/// Embedded language data.
pub const DATA: &str = include_str!("../data/russian.toml");

pub const CASE_COUNT: usize = 6;

/// Russian names: six cases, no vocative.
#[derive(Debug)]
pub struct Russian {
    data: LanguageData,
    rules: RuleBook<Russian>,
    parts: PartHeuristics,
    genders: GenderHeuristics,
    irregular: IrregularTable,
}

impl Russian {
    pub fn new() -> Result<Self> {
        Self::from_toml_str(DATA)
    }

    /// Build the module from a data file with the same schema.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let data = LanguageData::from_toml_str(content)?;
        if data.case_count() != CASE_COUNT {
            return Err(NameCaseError::InvalidLanguageData {
                language: data.code.clone(),
                message: format!("expected {CASE_COUNT} cases, found {}", data.case_count()),
            });
        }
        let rules = RuleBook::build(&data.code, rules::all(), &data.chains)?;
        let irregular = IrregularTable::new(&data.irregular);
        debug!(
            language = %data.code,
            rules = rules.len(),
            irregular = irregular.len(),
            "loaded language data"
        );
        Ok(Self {
            parts: PartHeuristics::new(data.part_hints.clone()),
            genders: GenderHeuristics::new(data.gender_hints.clone()),
            data,
            rules,
            irregular,
        })
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn rules(&self) -> &RuleBook<Russian> {
        &self.rules
    }

    pub(crate) fn irregular(&self) -> &IrregularTable {
        &self.irregular
    }
}

impl LanguageModule for Russian {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn decline(gender: Gender, part: NamePart, word: &str) -> Vec<String> {
        let lang = Russian::new().unwrap();
        let w = WorkingWord::new(word);
        lang.rule_chain(gender, part)
            .iter()
            .find_map(|id| lang.apply_rule(*id, &w))
            .unwrap_or_else(|| w.identity(CASE_COUNT))
    }

    #[test]
    fn test_embedded_data_loads() {
        let lang = Russian::new().unwrap();
        assert_eq!(lang.code(), "ru");
        assert_eq!(lang.case_names()[5], "prepositional");
        assert!(lang.vowels().contains('ё'));
        assert_eq!(lang.rules().len(), 13);
        assert_eq!(lang.aliases(), &["rus", "russian", "русский"]);
    }

    #[test]
    fn test_masculine() {
        assert_eq!(
            decline(Gender::Masculine, NamePart::Family, "облогин"),
            ["облогин", "облогина", "облогину", "облогина", "облогиным", "облогине"]
        );
        assert_eq!(
            decline(Gender::Masculine, NamePart::Given, "денис"),
            ["денис", "дениса", "денису", "дениса", "денисом", "денисе"]
        );
        assert_eq!(decline(Gender::Masculine, NamePart::Given, "игорь")[1], "игоря");
        assert_eq!(decline(Gender::Masculine, NamePart::Given, "андрей")[4], "андреем");
        assert_eq!(decline(Gender::Masculine, NamePart::Given, "дмитрий")[5], "дмитрии");
        assert_eq!(decline(Gender::Masculine, NamePart::Given, "никита")[4], "никитой");
        assert_eq!(decline(Gender::Masculine, NamePart::Given, "илья")[1], "ильи");
        assert_eq!(decline(Gender::Masculine, NamePart::Given, "павел")[1], "павла");
        assert_eq!(decline(Gender::Masculine, NamePart::Given, "лев")[4], "львом");
        assert_eq!(decline(Gender::Masculine, NamePart::Family, "достоевский")[1], "достоевского");
        assert_eq!(decline(Gender::Masculine, NamePart::Family, "толстой")[4], "толстым");
        assert_eq!(decline(Gender::Masculine, NamePart::Family, "донской")[4], "донским");
        assert_eq!(decline(Gender::Masculine, NamePart::Family, "кузнец")[4], "кузнецом");
    }

    #[test]
    fn test_feminine() {
        assert_eq!(
            decline(Gender::Feminine, NamePart::Family, "иванова"),
            ["иванова", "ивановой", "ивановой", "иванову", "ивановой", "ивановой"]
        );
        assert_eq!(decline(Gender::Feminine, NamePart::Family, "достоевская")[3], "достоевскую");
        assert_eq!(decline(Gender::Feminine, NamePart::Given, "анна")[1], "анны");
        assert_eq!(decline(Gender::Feminine, NamePart::Given, "ольга")[1], "ольги");
        assert_eq!(decline(Gender::Feminine, NamePart::Given, "мария")[2], "марии");
        assert_eq!(decline(Gender::Feminine, NamePart::Given, "наталья")[2], "наталье");
        assert_eq!(decline(Gender::Feminine, NamePart::Given, "любовь")[4], "любовью");
        assert_eq!(decline(Gender::Feminine, NamePart::Given, "саша")[4], "сашей");
        assert_eq!(
            decline(Gender::Feminine, NamePart::Family, "облогин"),
            vec!["облогин"; CASE_COUNT]
        );
    }

    #[test]
    fn test_patronymics() {
        assert_eq!(
            decline(Gender::Masculine, NamePart::Patronymic, "иванович"),
            ["иванович", "ивановича", "ивановичу", "ивановича", "ивановичем", "ивановиче"]
        );
        assert_eq!(decline(Gender::Feminine, NamePart::Patronymic, "ивановна")[1], "ивановны");
    }

    #[test]
    fn test_indeclinable_surnames() {
        for word in ["черных", "бондаренко", "живаго"] {
            for gender in Gender::ALL {
                assert_eq!(
                    decline(gender, NamePart::Family, word),
                    vec![word; CASE_COUNT],
                    "{word}"
                );
            }
        }
    }

    #[test]
    fn test_classification_hints() {
        let lang = Russian::new().unwrap();
        let priority = lang.part_priority();
        let part = |w: &str| lang.classify_part(&WorkingWord::new(w)).winner(&priority);
        assert_eq!(part("облогин"), NamePart::Family);
        assert_eq!(part("денис"), NamePart::Given);
        assert_eq!(part("марина"), NamePart::Given);
        assert_eq!(part("петрович"), NamePart::Patronymic);
        assert_eq!(part("сергеевна"), NamePart::Patronymic);
    }

    #[test]
    fn test_short_words_do_not_panic() {
        let lang = Russian::new().unwrap();
        for word in ["", "а", "я", "й", "ь", "ий", "ая", "на", "ич"] {
            let w = WorkingWord::new(word);
            for gender in Gender::ALL {
                for part in NamePart::ALL {
                    for id in lang.rule_chain(gender, part) {
                        if let Some(forms) = lang.apply_rule(*id, &w) {
                            assert_eq!(forms.len(), CASE_COUNT);
                        }
                    }
                }
            }
        }
    }
}
