//! Language data files.
//!
//! Each language crate ships one TOML file with its alphabet classes, case
//! names, rule chains, heuristic hints and irregular paradigms. This module
//! owns the schema and the checks that do not depend on the rule set.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{NameCaseError, Result};
use crate::heuristics::{GenderHint, PartHint};
use crate::language::{Gender, NamePart};
use crate::rules::ChainTable;
use crate::text::CharSet;

fn default_priority() -> [NamePart; 3] {
    [NamePart::Given, NamePart::Family, NamePart::Patronymic]
}

/// Parsed contents of a language data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageData {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Case names in case-index order; the first is the nominative.
    pub cases: Vec<String>,
    pub vowels: CharSet,
    pub consonants: CharSet,
    #[serde(default = "default_priority")]
    pub part_priority: [NamePart; 3],
    pub chains: ChainTable,
    #[serde(default, rename = "part_hint")]
    pub part_hints: Vec<PartHint>,
    #[serde(default, rename = "gender_hint")]
    pub gender_hints: Vec<GenderHint>,
    #[serde(default)]
    pub irregular: Vec<IrregularEntry>,
}

/// A name whose paradigm is listed in full.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrregularEntry {
    pub name: String,
    pub gender: Gender,
    /// Every case form, nominative first.
    pub forms: Vec<String>,
}

impl LanguageData {
    /// Parse and validate a data file.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let data: LanguageData = toml::from_str(content)
            .map_err(|e| NameCaseError::data("<unparsed>", e.to_string()))?;
        data.validate()?;
        Ok(data)
    }

    fn validate(&self) -> Result<()> {
        if self.cases.is_empty() {
            return Err(NameCaseError::data(&self.code, "no cases declared"));
        }
        let mut seen = [false; 3];
        for part in self.part_priority {
            let slot = &mut seen[part.index()];
            if *slot {
                return Err(NameCaseError::data(
                    &self.code,
                    format!("part `{part}` listed twice in part_priority"),
                ));
            }
            *slot = true;
        }
        for entry in &self.irregular {
            if entry.forms.len() != self.cases.len() {
                return Err(NameCaseError::data(
                    &self.code,
                    format!(
                        "irregular `{}` has {} forms, expected {}",
                        entry.name,
                        entry.forms.len(),
                        self.cases.len()
                    ),
                ));
            }
        }
        Ok(())
    }

    pub fn case_count(&self) -> usize {
        self.cases.len()
    }
}

/// Lookup table for irregular paradigms, keyed by gender and lowercase name.
#[derive(Debug, Clone, Default)]
pub struct IrregularTable {
    entries: AHashMap<(Gender, String), Vec<String>>,
}

impl IrregularTable {
    pub fn new(entries: &[IrregularEntry]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|e| {
                    (
                        (e.gender, e.name.to_lowercase()),
                        e.forms.iter().map(|f| f.to_lowercase()).collect(),
                    )
                })
                .collect(),
        }
    }

    pub fn lookup(&self, gender: Gender, word: &str) -> Option<Vec<String>> {
        self.entries.get(&(gender, word.to_string())).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        code = "xx"
        name = "Sample"
        aliases = ["sample"]
        cases = ["nominative", "genitive"]
        vowels = "аеиоу"
        consonants = "бвгд"

        [chains.masculine]
        given = ["irregular"]
        family = []
        patronymic = []

        [chains.feminine]
        given = []
        family = []
        patronymic = []

        [[part_hint]]
        part = "patronymic"
        weight = 3.0
        endings = ["ич"]

        [[gender_hint]]
        part = "patronymic"
        masculine = 10.0
        endings = ["ич"]

        [[irregular]]
        name = "Павел"
        gender = "masculine"
        forms = ["павел", "павла"]
    "#;

    #[test]
    fn test_parse_sample() {
        let data = LanguageData::from_toml_str(SAMPLE).unwrap();
        assert_eq!(data.code, "xx");
        assert_eq!(data.aliases, vec!["sample"]);
        assert_eq!(data.case_count(), 2);
        assert_eq!(data.part_priority, default_priority());
        assert_eq!(data.part_hints.len(), 1);
        assert_eq!(data.gender_hints[0].feminine, 0.0);
        assert!(data.vowels.contains('а'));

        let table = IrregularTable::new(&data.irregular);
        assert_eq!(
            table.lookup(Gender::Masculine, "павел"),
            Some(vec!["павел".to_string(), "павла".to_string()])
        );
        assert_eq!(table.lookup(Gender::Feminine, "павел"), None);
    }

    #[test]
    fn test_wrong_irregular_length() {
        let bad = SAMPLE.replace(r#"forms = ["павел", "павла"]"#, r#"forms = ["павел"]"#);
        let err = LanguageData::from_toml_str(&bad).unwrap_err();
        assert!(matches!(err, NameCaseError::InvalidLanguageData { .. }));
    }

    #[test]
    fn test_duplicate_priority() {
        let bad = SAMPLE.replace(
            "consonants = \"бвгд\"",
            "consonants = \"бвгд\"\npart_priority = [\"given\", \"given\", \"family\"]",
        );
        assert!(LanguageData::from_toml_str(&bad).is_err());
    }

    #[test]
    fn test_unparseable() {
        assert!(matches!(
            LanguageData::from_toml_str("code = ").unwrap_err(),
            NameCaseError::InvalidLanguageData { .. }
        ));
    }
}
