//! Per-token record carried through classification, gender resolution and
//! declension.

use serde::{Deserialize, Serialize};

use crate::language::{Gender, NamePart, RuleId};
use crate::text::{self, WorkingWord};

/// Letter-case shape of the original token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterMask {
    /// Every letter is uppercase.
    AllUpper,
    /// One flag per char of the original text; `true` means uppercase.
    Positional(Vec<bool>),
}

impl LetterMask {
    /// Scan `original` and record which chars are uppercase.
    ///
    /// A word whose alphabetic chars are all uppercase is `AllUpper` even
    /// when it contains apostrophes or hyphens.
    pub fn scan(original: &str) -> Self {
        let chars = text::letters(original);
        let mut alphabetic = chars.iter().filter(|ch| ch.is_alphabetic()).peekable();
        if alphabetic.peek().is_some() && alphabetic.all(|ch| !text::is_lowercase(*ch)) {
            return LetterMask::AllUpper;
        }
        LetterMask::Positional(chars.into_iter().map(|ch| !text::is_lowercase(ch)).collect())
    }

    /// Re-apply the mask to a lowercase form.
    ///
    /// Chars beyond the mask length keep the case they were produced in.
    pub fn apply(&self, form: &str) -> String {
        match self {
            LetterMask::AllUpper => form.to_uppercase(),
            LetterMask::Positional(flags) => {
                let mut out = String::with_capacity(form.len());
                for (idx, ch) in form.chars().enumerate() {
                    if flags.get(idx).copied().unwrap_or(false) {
                        out.extend(ch.to_uppercase());
                    } else {
                        out.push(ch);
                    }
                }
                out
            }
        }
    }

    pub fn is_all_upper(&self) -> bool {
        matches!(self, LetterMask::AllUpper)
    }
}

/// One name token and everything computed about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    original: String,
    normalized: String,
    mask: LetterMask,
    part: Option<NamePart>,
    part_explicit: bool,
    masculine_score: f32,
    feminine_score: f32,
    explicit_gender: Option<Gender>,
    gender: Option<Gender>,
    cases: Vec<String>,
    rule: Option<RuleId>,
}

impl WordRecord {
    /// Build a record from raw text. The text is NFC-composed and trimmed;
    /// the mask is taken from that form.
    pub fn new(text: &str) -> Self {
        let original = text::normalize(text);
        let mask = LetterMask::scan(&original);
        let normalized = original.to_lowercase();
        Self {
            original,
            normalized,
            mask,
            part: None,
            part_explicit: false,
            masculine_score: 0.0,
            feminine_score: 0.0,
            explicit_gender: None,
            gender: None,
            cases: Vec::new(),
            rule: None,
        }
    }

    /// Build a record whose part is known up front.
    pub fn with_part(text: &str, part: NamePart) -> Self {
        let mut record = Self::new(text);
        record.part = Some(part);
        record.part_explicit = true;
        record
    }

    // ========== Text ==========

    pub fn original(&self) -> &str {
        &self.original
    }

    /// Lowercase form used for every rule lookup.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn mask(&self) -> &LetterMask {
        &self.mask
    }

    pub fn working_word(&self) -> WorkingWord<'_> {
        WorkingWord::new(&self.normalized)
    }

    // ========== Part ==========

    pub fn part(&self) -> Option<NamePart> {
        self.part
    }

    pub fn is_part(&self, part: NamePart) -> bool {
        self.part == Some(part)
    }

    /// True when the part was supplied by the caller rather than inferred.
    pub fn is_part_explicit(&self) -> bool {
        self.part_explicit
    }

    pub(crate) fn set_inferred_part(&mut self, part: NamePart) {
        self.part = Some(part);
    }

    // ========== Gender ==========

    pub fn masculine_score(&self) -> f32 {
        self.masculine_score
    }

    pub fn feminine_score(&self) -> f32 {
        self.feminine_score
    }

    /// Add gender evidence. Negative increments are ignored so scores only
    /// grow within a pass.
    pub fn add_gender_scores(&mut self, masculine: f32, feminine: f32) {
        self.masculine_score += masculine.max(0.0);
        self.feminine_score += feminine.max(0.0);
    }

    pub(crate) fn clear_gender_scores(&mut self) {
        self.masculine_score = 0.0;
        self.feminine_score = 0.0;
    }

    /// Gender supplied by the caller, if any.
    pub fn explicit_gender(&self) -> Option<Gender> {
        self.explicit_gender
    }

    pub fn set_explicit_gender(&mut self, gender: Gender) {
        self.explicit_gender = Some(gender);
    }

    /// Gender resolved for the whole name in the current pass.
    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn is_gender_resolved(&self) -> bool {
        self.gender.is_some()
    }

    /// Set the resolved gender. A gender already resolved in this pass is
    /// kept; returns whether the value was stored.
    pub(crate) fn resolve_gender(&mut self, gender: Gender) -> bool {
        if self.gender.is_some() {
            return false;
        }
        self.gender = Some(gender);
        true
    }

    pub(crate) fn invalidate(&mut self) {
        self.gender = None;
        if !self.part_explicit {
            self.part = None;
        }
    }

    // ========== Cases ==========

    /// Declined forms, nominative first. Empty until declined.
    pub fn case_forms(&self) -> &[String] {
        &self.cases
    }

    pub fn case_form(&self, index: usize) -> Option<&str> {
        self.cases.get(index).map(String::as_str)
    }

    pub fn is_declined(&self) -> bool {
        !self.cases.is_empty()
    }

    /// Store case forms, optionally re-applying the letter mask first.
    pub fn set_case_forms(&mut self, forms: Vec<String>, restore_mask: bool) {
        self.cases = if restore_mask {
            forms.iter().map(|f| self.mask.apply(f)).collect()
        } else {
            forms
        };
    }

    /// Rule that produced the forms; `None` means the identity paradigm.
    pub fn applied_rule(&self) -> Option<RuleId> {
        self.rule
    }

    pub(crate) fn set_applied_rule(&mut self, rule: Option<RuleId>) {
        self.rule = rule;
    }
}
