//! Format templates and case output.
//!
//! A template is a short string where marker chars (`S`, `N`, `F` by
//! default) stand for the family name, given name and patronymic; every
//! other char is copied through as a separator.

use serde::Serialize;

use crate::config::Config;
use crate::language::NamePart;

/// Piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Part(NamePart),
    Literal(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(format: &str, config: &Config) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        for ch in format.chars() {
            match config.marker_part(ch) {
                Some(part) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Part(part));
                }
                None => literal.push(ch),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Render with `fill` supplying the text for each part marker.
    ///
    /// Literals are copied through as written. The only exception is a
    /// whitespace separator sitting between two markers when one of them
    /// renders empty: it is dropped so a missing part leaves no double or
    /// dangling space.
    pub fn render<F>(&self, mut fill: F) -> String
    where
        F: FnMut(NamePart) -> String,
    {
        let filled: Vec<Option<String>> = self
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Part(part) => Some(fill(*part)),
                Segment::Literal(_) => None,
            })
            .collect();
        let n = self.segments.len();
        let is_part = |i: usize| matches!(self.segments.get(i), Some(Segment::Part(_)));
        let is_gap = |i: usize| {
            matches!(self.segments.get(i),
                Some(Segment::Literal(text)) if text.chars().all(char::is_whitespace))
        };

        let mut skip = vec![false; n];
        for i in 0..n {
            if !matches!(&filled[i], Some(text) if text.is_empty()) {
                continue;
            }
            if i + 2 < n && is_gap(i + 1) && is_part(i + 2) {
                skip[i + 1] = true;
            } else if i >= 2 && is_gap(i - 1) && is_part(i - 2) && !skip[i - 1] {
                skip[i - 1] = true;
            }
        }

        let mut out = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if skip[i] {
                continue;
            }
            match (segment, &filled[i]) {
                (_, Some(text)) => out.push_str(text),
                (Segment::Literal(text), None) => out.push_str(text),
                (Segment::Part(_), None) => {}
            }
        }
        out
    }
}

/// Either one case form or the whole paradigm, depending on the requested
/// case index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CaseOutput {
    Single(String),
    All(Vec<String>),
}

impl CaseOutput {
    pub fn as_single(&self) -> Option<&str> {
        match self {
            CaseOutput::Single(s) => Some(s),
            CaseOutput::All(_) => None,
        }
    }

    pub fn as_all(&self) -> Option<&[String]> {
        match self {
            CaseOutput::Single(_) => None,
            CaseOutput::All(v) => Some(v),
        }
    }

    /// Flatten into a list; a single form becomes a one-element list.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            CaseOutput::Single(s) => vec![s],
            CaseOutput::All(v) => v,
        }
    }
}

impl std::fmt::Display for CaseOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaseOutput::Single(s) => f.write_str(s),
            CaseOutput::All(v) => f.write_str(&v.join("\n")),
        }
    }
}

/// Resolve a requested case index: `Some(i)` only when `i` is in range.
pub(crate) fn case_in_range(case: Option<usize>, case_count: usize) -> Option<usize> {
    case.filter(|c| *c < case_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_markers() {
        let t = Template::parse("S N F", &Config::default());
        assert_eq!(
            t.segments(),
            &[
                Segment::Part(NamePart::Family),
                Segment::Literal(" ".into()),
                Segment::Part(NamePart::Given),
                Segment::Literal(" ".into()),
                Segment::Part(NamePart::Patronymic),
            ]
        );
    }

    #[test]
    fn test_render_passes_literals_through() {
        let t = Template::parse("S, N.", &Config::default());
        let out = t.render(|part| match part {
            NamePart::Family => "Шевченка".into(),
            NamePart::Given => "Тараса".into(),
            NamePart::Patronymic => unreachable!(),
        });
        assert_eq!(out, "Шевченка, Тараса.");
    }

    #[test]
    fn test_render_drops_gap_of_empty_part() {
        let t = Template::parse("S N F", &Config::default());
        let out = t.render(|part| match part {
            NamePart::Family => "Облогина".into(),
            NamePart::Given => "Дениса".into(),
            NamePart::Patronymic => String::new(),
        });
        assert_eq!(out, "Облогина Дениса");

        let out = t.render(|part| match part {
            NamePart::Given => String::new(),
            _ => "x".into(),
        });
        assert_eq!(out, "x x");
        assert_eq!(t.render(|_| String::new()), "");
    }

    #[test]
    fn test_render_keeps_outer_literals() {
        let t = Template::parse("  S N F  ", &Config::default());
        let out = t.render(|part| match part {
            NamePart::Family => "Шевченка".into(),
            NamePart::Given => "Тараса".into(),
            NamePart::Patronymic => "Григоровича".into(),
        });
        assert_eq!(out, "  Шевченка Тараса Григоровича  ");

        let out = t.render(|part| match part {
            NamePart::Patronymic => String::new(),
            _ => "x".into(),
        });
        assert_eq!(out, "  x x  ");
    }

    #[test]
    fn test_custom_markers() {
        let cfg = Config {
            given_marker: 'g',
            family_marker: 'f',
            patronymic_marker: 'p',
            ..Config::default()
        };
        let t = Template::parse("g p (S)", &cfg);
        assert_eq!(t.segments()[0], Segment::Part(NamePart::Given));
        assert_eq!(t.segments()[2], Segment::Part(NamePart::Patronymic));
        assert_eq!(t.segments()[3], Segment::Literal(" (S)".into()));
    }

    #[test]
    fn test_case_in_range() {
        assert_eq!(case_in_range(Some(0), 6), Some(0));
        assert_eq!(case_in_range(Some(5), 6), Some(5));
        assert_eq!(case_in_range(Some(6), 6), None);
        assert_eq!(case_in_range(None, 6), None);
    }
}
