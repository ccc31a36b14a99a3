//! Unicode-aware text helpers.
//!
//! Everything here works on `char`s rather than bytes so Cyrillic names can
//! be sliced from the end without worrying about UTF-8 boundaries.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Normalize input strings (NFC) and trim whitespace.
pub fn normalize(s: &str) -> String {
    s.nfc().collect::<String>().trim().to_string()
}

/// True when lowercasing `ch` leaves it unchanged. Non-letters count as
/// lowercase.
pub fn is_lowercase(ch: char) -> bool {
    let mut lower = ch.to_lowercase();
    lower.next() == Some(ch) && lower.next().is_none()
}

/// Split a string into its letters (Unicode scalar values).
pub fn letters(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Number of chars in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// A set of characters used by rule predicates (vowels, consonants, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CharSet {
    source: String,
    chars: AHashSet<char>,
}

impl CharSet {
    pub fn new(chars: &str) -> Self {
        Self {
            source: chars.to_string(),
            chars: chars.chars().collect(),
        }
    }

    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// `contains` lifted over an optional char; `None` never matches.
    #[inline]
    pub fn has(&self, ch: Option<char>) -> bool {
        ch.is_some_and(|c| self.contains(c))
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl PartialEq for CharSet {
    fn eq(&self, other: &Self) -> bool {
        self.chars == other.chars
    }
}

impl Eq for CharSet {}

impl From<String> for CharSet {
    fn from(s: String) -> Self {
        CharSet::new(&s)
    }
}

impl From<CharSet> for String {
    fn from(set: CharSet) -> Self {
        set.source
    }
}

/// The token currently being classified or declined.
///
/// Char boundaries are computed once when the view is built, so every
/// tail lookup made by heuristics and rules is O(1) and allocation free.
/// The table lives exactly as long as the view.
#[derive(Debug, Clone)]
pub struct WorkingWord<'a> {
    text: &'a str,
    bounds: Vec<usize>,
}

impl<'a> WorkingWord<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut bounds: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        bounds.push(text.len());
        Self { text, bounds }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Length in chars.
    pub fn len(&self) -> usize {
        self.bounds.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The last `n` chars, or the whole word when it is shorter.
    pub fn last(&self, n: usize) -> &'a str {
        self.tail(n, n)
    }

    /// `take` chars starting `n` chars from the end.
    ///
    /// `tail(2, 1)` is the penultimate char of the word.
    pub fn tail(&self, n: usize, take: usize) -> &'a str {
        let len = self.len();
        let start = len.saturating_sub(n);
        let end = (start + take).min(len);
        &self.text[self.bounds[start]..self.bounds[end]]
    }

    /// The `k`-th char from the end, 1-based (`char_from_end(1)` is the last).
    pub fn char_from_end(&self, k: usize) -> Option<char> {
        if k == 0 || k > self.len() {
            return None;
        }
        self.tail(k, 1).chars().next()
    }

    pub fn last_char(&self) -> Option<char> {
        self.char_from_end(1)
    }

    pub fn ends_with(&self, suffix: &str) -> bool {
        self.text.ends_with(suffix)
    }

    pub fn ends_with_any<S: AsRef<str>>(&self, suffixes: &[S]) -> bool {
        suffixes.iter().any(|s| {
            let s = s.as_ref();
            !s.is_empty() && self.text.ends_with(s)
        })
    }

    /// The word without its last `strip` chars.
    pub fn stem(&self, strip: usize) -> &'a str {
        let keep = self.len().saturating_sub(strip);
        &self.text[..self.bounds[keep]]
    }

    /// Nominative plus one form per ending, each built by dropping `strip`
    /// trailing chars and appending the ending.
    pub fn forms(&self, strip: usize, endings: &[&str]) -> Vec<String> {
        let stem = self.stem(strip);
        std::iter::once(self.text.to_string())
            .chain(endings.iter().map(|e| format!("{stem}{e}")))
            .collect()
    }

    /// Every case equal to the word itself.
    pub fn identity(&self, case_count: usize) -> Vec<String> {
        vec![self.text.to_string(); case_count]
    }
}
