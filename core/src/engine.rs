// core/src/engine.rs
//
// Generic declension engine that works with any language module.
// Language crates (namecase-uk, namecase-ru) only supply data and rules.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, trace, warn};

use crate::config::Config;
use crate::error::{NameCaseError, Result};
use crate::format::{case_in_range, CaseOutput, Template};
use crate::language::{Gender, LanguageModule, NamePart, RuleId};
use crate::text::WorkingWord;
use crate::word::WordRecord;

/// Gender chosen when the aggregated evidence is tied.
pub const TIE_GENDER: Gender = Gender::Feminine;

static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

fn next_session() -> u64 {
    NEXT_SESSION.fetch_add(1, Ordering::Relaxed)
}

/// Where an engine is in its analysis pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Empty,
    Ingested,
    Classified,
    GenderResolved,
    Declined,
    Formatted,
}

/// Handle to a record owned by one engine session.
///
/// Handles from another engine, or from before a `reset`, are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId {
    session: u64,
    index: usize,
}

impl RecordId {
    /// Position of the record in ingestion order.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Declension engine for one name-analysis session.
///
/// Type parameter L is the language module (e.g. `&'static Ukrainian`,
/// `Arc<dyn LanguageModule>`).
///
/// The engine owns its records and is mutated by every query that needs a
/// fresher stage, so it is meant to be used by one caller at a time.
#[derive(Debug)]
pub struct Engine<L> {
    language: L,
    config: Config,
    session: u64,
    records: Vec<WordRecord>,
    index: [Vec<usize>; 3],
    gender_override: Option<Gender>,
    stage: Stage,
}

impl<L: LanguageModule> Engine<L> {
    /// Create an engine with the default configuration.
    pub fn new(language: L) -> Self {
        Self::with_config(language, Config::default())
    }

    pub fn with_config(language: L, config: Config) -> Self {
        Self {
            language,
            config,
            session: next_session(),
            records: Vec::new(),
            index: Default::default(),
            gender_override: None,
            stage: Stage::Empty,
        }
    }

    pub fn language(&self) -> &L {
        &self.language
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the configuration. Declined forms are recomputed on the
    /// next query.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
        if self.stage > Stage::GenderResolved {
            self.stage = Stage::GenderResolved;
        }
    }

    pub fn case_count(&self) -> usize {
        self.language.case_count()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    /// Handles for every record, in ingestion order.
    pub fn record_ids(&self) -> Vec<RecordId> {
        (0..self.records.len()).map(|i| self.id(i)).collect()
    }

    pub fn record(&self, id: RecordId) -> Result<&WordRecord> {
        let index = self.check(id)?;
        Ok(&self.records[index])
    }

    /// Drop every record and any gender override.
    pub fn reset(&mut self) {
        self.session = next_session();
        self.records.clear();
        self.index = Default::default();
        self.gender_override = None;
        self.stage = Stage::Empty;
    }

    fn id(&self, index: usize) -> RecordId {
        RecordId {
            session: self.session,
            index,
        }
    }

    fn check(&self, id: RecordId) -> Result<usize> {
        if id.session != self.session {
            return Err(NameCaseError::contract(format!(
                "record handle {} belongs to another session",
                id.index
            )));
        }
        if id.index >= self.records.len() {
            return Err(NameCaseError::contract(format!(
                "record handle {} is out of range ({} records)",
                id.index,
                self.records.len()
            )));
        }
        Ok(id.index)
    }

    /// Forget every derived fact. Explicit parts and genders survive.
    fn invalidate(&mut self) {
        for record in &mut self.records {
            record.invalidate();
        }
        self.index = Default::default();
        self.stage = if self.records.is_empty() {
            Stage::Empty
        } else {
            Stage::Ingested
        };
    }

    // ========== Ingestion ==========

    /// Append one token, optionally with a known part.
    pub fn ingest(&mut self, token: &str, part: Option<NamePart>) -> RecordId {
        let record = match part {
            Some(part) => WordRecord::with_part(token, part),
            None => WordRecord::new(token),
        };
        self.records.push(record);
        self.invalidate();
        self.id(self.records.len() - 1)
    }

    fn ingest_words(&mut self, text: &str, part: Option<NamePart>) -> Vec<RecordId> {
        text.split_whitespace()
            .map(|token| self.ingest(token, part))
            .collect()
    }

    /// Add one or more given names (whitespace separated).
    pub fn set_given_name(&mut self, text: &str) -> &mut Self {
        self.ingest_words(text, Some(NamePart::Given));
        self
    }

    /// Add one or more family names (whitespace separated).
    pub fn set_family_name(&mut self, text: &str) -> &mut Self {
        self.ingest_words(text, Some(NamePart::Family));
        self
    }

    /// Add one or more patronymics (whitespace separated).
    pub fn set_patronymic(&mut self, text: &str) -> &mut Self {
        self.ingest_words(text, Some(NamePart::Patronymic));
        self
    }

    pub fn set_full_name(&mut self, family: &str, given: &str, patronymic: &str) -> &mut Self {
        self.set_family_name(family)
            .set_given_name(given)
            .set_patronymic(patronymic)
    }

    /// Override gender detection for this session.
    pub fn set_gender(&mut self, gender: Gender) -> &mut Self {
        self.gender_override = Some(gender);
        self.invalidate();
        self
    }

    /// Mark one record as carrying a known gender.
    pub fn set_record_gender(&mut self, id: RecordId, gender: Gender) -> Result<()> {
        let index = self.check(id)?;
        self.records[index].set_explicit_gender(gender);
        self.invalidate();
        Ok(())
    }

    /// Split a full name on whitespace, one unlabelled record per token,
    /// then classify and resolve gender.
    ///
    /// Returns the handles of the new records in input order.
    pub fn split_full_name(&mut self, text: &str) -> Vec<RecordId> {
        let ids = self.ingest_words(text, None);
        self.prepare();
        ids
    }

    // ========== Analysis ==========

    /// Label every record that has no part yet and rebuild the part index.
    pub fn classify_all(&mut self) {
        if self.stage >= Stage::Classified || self.records.is_empty() {
            return;
        }
        let priority = self.language.part_priority();
        for record in &mut self.records {
            if record.part().is_some() {
                continue;
            }
            let scores = self.language.classify_part(&record.working_word());
            let part = scores.winner(&priority);
            debug!(
                word = record.normalized(),
                %part,
                given = scores.given,
                family = scores.family,
                patronymic = scores.patronymic,
                "classified"
            );
            record.set_inferred_part(part);
        }
        self.rebuild_index();
        self.stage = Stage::Classified;
    }

    fn rebuild_index(&mut self) {
        let mut index: [Vec<usize>; 3] = Default::default();
        for (i, record) in self.records.iter().enumerate() {
            if let Some(part) = record.part() {
                index[part.index()].push(i);
            }
        }
        self.index = index;
    }

    /// Resolve one gender for the whole name.
    ///
    /// An explicit gender (session override, then any record's) wins.
    /// Otherwise per-record evidence is summed and the larger total wins;
    /// a tie gives [`TIE_GENDER`].
    pub fn resolve_gender(&mut self) -> Option<Gender> {
        self.classify_all();
        if self.stage >= Stage::GenderResolved || self.records.is_empty() {
            return self.current_gender();
        }

        let explicit = self
            .gender_override
            .or_else(|| self.records.iter().find_map(WordRecord::explicit_gender));

        let gender = match explicit {
            Some(gender) => {
                debug!(%gender, "using explicit gender");
                gender
            }
            None => {
                let (mut masculine, mut feminine) = (0.0f32, 0.0f32);
                for record in &mut self.records {
                    record.clear_gender_scores();
                    let part = record.part().unwrap_or(NamePart::Given);
                    let delta = self.language.infer_gender(&record.working_word(), part);
                    record.add_gender_scores(delta.masculine, delta.feminine);
                    masculine += record.masculine_score();
                    feminine += record.feminine_score();
                }
                let gender = if masculine > feminine {
                    Gender::Masculine
                } else if feminine > masculine {
                    Gender::Feminine
                } else {
                    TIE_GENDER
                };
                debug!(masculine, feminine, %gender, "inferred gender");
                gender
            }
        };

        for record in &mut self.records {
            record.resolve_gender(gender);
        }
        self.stage = Stage::GenderResolved;
        Some(gender)
    }

    fn current_gender(&self) -> Option<Gender> {
        self.records.first().and_then(WordRecord::gender)
    }

    /// Classify, resolve gender and index. No-op when already done.
    pub fn prepare(&mut self) {
        self.classify_all();
        self.resolve_gender();
    }

    /// Gender of the current name, detecting it if needed.
    pub fn gender(&mut self) -> Option<Gender> {
        self.prepare();
        self.current_gender()
    }

    /// Decline every record.
    pub fn decline_all(&mut self) {
        self.prepare();
        if self.stage >= Stage::Declined || self.records.is_empty() {
            return;
        }
        for i in 0..self.records.len() {
            let (forms, rule) = self.decline_record(&self.records[i]);
            let record = &mut self.records[i];
            record.set_case_forms(forms, false);
            record.set_applied_rule(rule);
        }
        self.stage = Stage::Declined;
    }

    /// Decline one record with its resolved gender and part.
    ///
    /// Compound tokens are split on the configured separator and every
    /// component is declined on its own, then joined back per case. For a
    /// compound family name, a non-final component is only declined when it
    /// classifies as a family name itself. Each component gets its own
    /// letter-case mask back.
    fn decline_record(&self, record: &WordRecord) -> (Vec<String>, Option<RuleId>) {
        let case_count = self.case_count();
        let gender = record.gender().unwrap_or(TIE_GENDER);
        let part = record.part().unwrap_or(NamePart::Given);
        let sep = self.config.compound_separator;

        let pieces: Vec<&str> = record.original().split(sep).collect();
        let last = pieces.len() - 1;
        let mut joined = vec![String::new(); case_count];
        let mut rule = None;

        for (k, piece) in pieces.iter().enumerate() {
            let mut component = WordRecord::new(piece);
            let word = component.working_word();
            let inflects = part != NamePart::Family
                || k == last
                || !self.config.recheck_compound_heads
                || self.looks_like_family(&word);

            let (forms, applied) = if inflects {
                self.run_chain(gender, part, &word)
            } else {
                debug!(component = word.as_str(), "compound head kept invariant");
                (word.identity(case_count), None)
            };
            component.set_case_forms(forms, true);

            for (case, form) in component.case_forms().iter().enumerate() {
                if k > 0 {
                    joined[case].push(sep);
                }
                joined[case].push_str(form);
            }
            rule = applied;
        }

        match rule {
            Some(id) => debug!(word = record.normalized(), rule = %id, %gender, %part, "declined"),
            None => debug!(word = record.normalized(), %gender, %part, "no rule matched, identity used"),
        }
        (joined, rule)
    }

    fn looks_like_family(&self, word: &WorkingWord<'_>) -> bool {
        let scores = self.language.classify_part(word);
        scores.winner(&self.language.part_priority()) == NamePart::Family
    }

    /// First matching rule of the chain wins; no match gives the identity
    /// paradigm.
    fn run_chain(
        &self,
        gender: Gender,
        part: NamePart,
        word: &WorkingWord<'_>,
    ) -> (Vec<String>, Option<RuleId>) {
        let case_count = self.case_count();
        for id in self.language.rule_chain(gender, part) {
            trace!(word = word.as_str(), rule = %id, "trying rule");
            if let Some(forms) = self.language.apply_rule(*id, word) {
                if forms.len() == case_count {
                    return (forms, Some(*id));
                }
                warn!(
                    language = self.language.code(),
                    rule = %id,
                    produced = forms.len(),
                    expected = case_count,
                    "rule produced a malformed paradigm, skipping it"
                );
            }
        }
        (word.identity(case_count), None)
    }

    // ========== Output ==========

    fn mark_formatted(&mut self) {
        if self.stage == Stage::Declined {
            self.stage = Stage::Formatted;
        }
    }

    /// All records of `part` in case `case`, joined with single spaces.
    fn joined_part(&self, part: NamePart, case: usize) -> String {
        self.index[part.index()]
            .iter()
            .map(|i| self.records[*i].case_form(case).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn part_case(&mut self, part: NamePart, case: Option<usize>) -> CaseOutput {
        self.decline_all();
        self.mark_formatted();
        let case_count = self.case_count();
        match case_in_range(case, case_count) {
            Some(c) => CaseOutput::Single(self.joined_part(part, c)),
            None => CaseOutput::All((0..case_count).map(|c| self.joined_part(part, c)).collect()),
        }
    }

    /// Given name(s) in case `case`; `None` or an out-of-range index gives
    /// every case.
    pub fn given_name_case(&mut self, case: Option<usize>) -> CaseOutput {
        self.part_case(NamePart::Given, case)
    }

    pub fn family_name_case(&mut self, case: Option<usize>) -> CaseOutput {
        self.part_case(NamePart::Family, case)
    }

    pub fn patronymic_case(&mut self, case: Option<usize>) -> CaseOutput {
        self.part_case(NamePart::Patronymic, case)
    }

    /// Render `template` for case `case`; `None` or an out-of-range index
    /// gives one rendering per case.
    pub fn formatted(&mut self, case: Option<usize>, template: &str) -> CaseOutput {
        self.decline_all();
        self.mark_formatted();
        let template = Template::parse(template, &self.config);
        let case_count = self.case_count();
        match case_in_range(case, case_count) {
            Some(c) => CaseOutput::Single(template.render(|part| self.joined_part(part, c))),
            None => CaseOutput::All(
                (0..case_count)
                    .map(|c| template.render(|part| self.joined_part(part, c)))
                    .collect(),
            ),
        }
    }

    /// `formatted` with the configured default template.
    pub fn formatted_default(&mut self, case: Option<usize>) -> CaseOutput {
        let template = self.config.default_format.clone();
        self.formatted(case, &template)
    }

    /// Render an explicit ordered list of records joined with spaces.
    pub fn formatted_records(
        &mut self,
        case: Option<usize>,
        records: &[RecordId],
    ) -> Result<CaseOutput> {
        let indices = records
            .iter()
            .map(|id| self.check(*id))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.render_records(case, &indices))
    }

    /// Every case of an explicit record list.
    pub fn formatted_all_records(&mut self, records: &[RecordId]) -> Result<Vec<String>> {
        Ok(self.formatted_records(None, records)?.into_vec())
    }

    fn render_records(&mut self, case: Option<usize>, indices: &[usize]) -> CaseOutput {
        self.decline_all();
        self.mark_formatted();
        let render = |c: usize| {
            indices
                .iter()
                .map(|i| self.records[*i].case_form(c).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(" ")
        };
        let case_count = self.case_count();
        match case_in_range(case, case_count) {
            Some(c) => CaseOutput::Single(render(c)),
            None => CaseOutput::All((0..case_count).map(render).collect()),
        }
    }

    /// Original text of every record labelled `part`, joined with spaces.
    pub fn names_of(&mut self, part: NamePart) -> String {
        self.prepare();
        self.index[part.index()]
            .iter()
            .map(|i| self.records[*i].original())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn given_names(&mut self) -> String {
        self.names_of(NamePart::Given)
    }

    pub fn family_names(&mut self) -> String {
        self.names_of(NamePart::Family)
    }

    pub fn patronymics(&mut self) -> String {
        self.names_of(NamePart::Patronymic)
    }

    // ========== One-shot helpers ==========

    fn one_shot(language: L, gender: Option<Gender>) -> Self {
        let mut engine = Self::new(language);
        if let Some(gender) = gender {
            engine.set_gender(gender);
        }
        engine
    }

    /// Decline a given name in a fresh session.
    pub fn decline_given_name(
        language: L,
        text: &str,
        case: Option<usize>,
        gender: Option<Gender>,
    ) -> CaseOutput {
        let mut engine = Self::one_shot(language, gender);
        engine.set_given_name(text);
        engine.given_name_case(case)
    }

    /// Decline a family name in a fresh session.
    pub fn decline_family_name(
        language: L,
        text: &str,
        case: Option<usize>,
        gender: Option<Gender>,
    ) -> CaseOutput {
        let mut engine = Self::one_shot(language, gender);
        engine.set_family_name(text);
        engine.family_name_case(case)
    }

    /// Decline a patronymic in a fresh session.
    pub fn decline_patronymic(
        language: L,
        text: &str,
        case: Option<usize>,
        gender: Option<Gender>,
    ) -> CaseOutput {
        let mut engine = Self::one_shot(language, gender);
        engine.set_patronymic(text);
        engine.patronymic_case(case)
    }

    /// Decline a whole name, keeping the input word order.
    pub fn decline_full_name(
        language: L,
        text: &str,
        case: Option<usize>,
        gender: Option<Gender>,
    ) -> CaseOutput {
        let mut engine = Self::one_shot(language, gender);
        let ids = engine.split_full_name(text);
        let indices: Vec<usize> = ids.iter().map(RecordId::index).collect();
        engine.render_records(case, &indices)
    }

    /// Detect the gender of a full name in a fresh session.
    pub fn detect_gender(language: L, text: &str) -> Option<Gender> {
        let mut engine = Self::new(language);
        engine.split_full_name(text);
        engine.gender()
    }
}
