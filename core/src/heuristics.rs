//! Table-driven heuristics for part classification and gender inference.
//!
//! Language data files list hints; each hint that matches a word adds its
//! weight once. The weights are tuned per language and are kept as data.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::language::{GenderScores, NamePart, PartScores};
use crate::text::{CharSet, WorkingWord};

/// Word shape a hint reacts to. Any one criterion matching is enough.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordPattern {
    /// Word ends with one of these suffixes.
    #[serde(default)]
    pub endings: Vec<String>,
    /// Word equals one of these (lowercase) names.
    #[serde(default)]
    pub names: Vec<String>,
    /// Last letter belongs to this set.
    #[serde(default)]
    pub last_char_in: Option<CharSet>,
}

#[derive(Debug, Clone)]
struct CompiledPattern {
    endings: Vec<String>,
    names: AHashSet<String>,
    last_char_in: Option<CharSet>,
}

impl CompiledPattern {
    fn new(pattern: WordPattern) -> Self {
        Self {
            endings: pattern.endings,
            names: pattern.names.into_iter().map(|n| n.to_lowercase()).collect(),
            last_char_in: pattern.last_char_in,
        }
    }

    fn matches(&self, word: &WorkingWord<'_>) -> bool {
        self.names.contains(word.as_str())
            || word.ends_with_any(&self.endings)
            || self
                .last_char_in
                .as_ref()
                .is_some_and(|set| set.has(word.last_char()))
    }
}

/// Classification hint: a match adds `weight` to `part`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartHint {
    pub part: NamePart,
    pub weight: f32,
    #[serde(flatten)]
    pub pattern: WordPattern,
}

/// Gender hint for words of `part`: a match adds the increments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenderHint {
    pub part: NamePart,
    #[serde(default)]
    pub masculine: f32,
    #[serde(default)]
    pub feminine: f32,
    #[serde(flatten)]
    pub pattern: WordPattern,
}

/// Compiled classification hints.
#[derive(Debug, Clone, Default)]
pub struct PartHeuristics {
    hints: Vec<(NamePart, f32, CompiledPattern)>,
}

impl PartHeuristics {
    pub fn new(hints: Vec<PartHint>) -> Self {
        Self {
            hints: hints
                .into_iter()
                .map(|h| (h.part, h.weight, CompiledPattern::new(h.pattern)))
                .collect(),
        }
    }

    pub fn score(&self, word: &WorkingWord<'_>) -> PartScores {
        let mut scores = PartScores::default();
        for (part, weight, pattern) in &self.hints {
            if pattern.matches(word) {
                scores.add(*part, *weight);
            }
        }
        scores
    }

    /// True when `word` is listed by name in any hint for `part`.
    pub fn is_listed(&self, word: &str, part: NamePart) -> bool {
        self.hints
            .iter()
            .any(|(p, _, pattern)| *p == part && pattern.names.contains(word))
    }
}

/// Compiled gender hints.
#[derive(Debug, Clone, Default)]
pub struct GenderHeuristics {
    hints: Vec<(NamePart, GenderScores, CompiledPattern)>,
}

impl GenderHeuristics {
    pub fn new(hints: Vec<GenderHint>) -> Self {
        Self {
            hints: hints
                .into_iter()
                .map(|h| {
                    (
                        h.part,
                        GenderScores::new(h.masculine, h.feminine),
                        CompiledPattern::new(h.pattern),
                    )
                })
                .collect(),
        }
    }

    pub fn score(&self, word: &WorkingWord<'_>, part: NamePart) -> GenderScores {
        let mut total = GenderScores::default();
        for (hint_part, delta, pattern) in &self.hints {
            if *hint_part == part && pattern.matches(word) {
                total.masculine += delta.masculine;
                total.feminine += delta.feminine;
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hints() -> Vec<PartHint> {
        let raw = r#"
            [[hint]]
            part = "patronymic"
            weight = 3.0
            endings = ["ович", "івна"]

            [[hint]]
            part = "given"
            weight = 10.0
            names = ["Тарас", "олена"]

            [[hint]]
            part = "family"
            weight = 0.5
            last_char_in = "о"
        "#;
        #[derive(Deserialize)]
        struct File {
            hint: Vec<PartHint>,
        }
        toml::from_str::<File>(raw).unwrap().hint
    }

    #[test]
    fn test_part_scores_accumulate() {
        let h = PartHeuristics::new(hints());
        let scores = h.score(&WorkingWord::new("григорович"));
        assert_eq!(scores.patronymic, 3.0);
        assert_eq!(scores.given, 0.0);

        let scores = h.score(&WorkingWord::new("тарас"));
        assert_eq!(scores.given, 10.0);

        let scores = h.score(&WorkingWord::new("шевченко"));
        assert_eq!(scores.family, 0.5);
        assert!(h.is_listed("олена", NamePart::Given));
        assert!(!h.is_listed("олена", NamePart::Family));
    }

    #[test]
    fn test_gender_scores_filter_by_part() {
        let h = GenderHeuristics::new(vec![
            GenderHint {
                part: NamePart::Patronymic,
                masculine: 10.0,
                feminine: 0.0,
                pattern: WordPattern {
                    endings: vec!["ич".into()],
                    ..Default::default()
                },
            },
            GenderHint {
                part: NamePart::Patronymic,
                masculine: 0.0,
                feminine: 12.0,
                pattern: WordPattern {
                    endings: vec!["на".into()],
                    ..Default::default()
                },
            },
        ]);
        let w = WorkingWord::new("петрович");
        assert_eq!(h.score(&w, NamePart::Patronymic), GenderScores::new(10.0, 0.0));
        assert_eq!(h.score(&w, NamePart::Given), GenderScores::default());
        let w = WorkingWord::new("петрівна");
        assert_eq!(h.score(&w, NamePart::Patronymic), GenderScores::new(0.0, 12.0));
    }
}
