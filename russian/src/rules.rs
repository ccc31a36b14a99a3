//! Russian declension rules.
//!
//! Forms are returned in case order: nominative, genitive, dative,
//! accusative, instrumental, prepositional. Surnames in -о, -их/-ых and
//! other indeclinable shapes match nothing and keep the identity paradigm.

use namecase_core::{Gender, LanguageModule, Rule, WorkingWord};

use crate::language::Russian;

type Forms = Option<Vec<String>>;

pub(crate) fn all() -> Vec<Rule<Russian>> {
    vec![
        Rule::new(1, "irregular_masculine", irregular_masculine),
        Rule::new(2, "irregular_feminine", irregular_feminine),
        Rule::new(10, "masculine_adjectival", masculine_adjectival),
        Rule::new(11, "masculine_ov_in", masculine_ov_in),
        Rule::new(12, "masculine_soft_sign", masculine_soft_sign),
        Rule::new(13, "masculine_yot", masculine_yot),
        Rule::new(14, "masculine_a", masculine_a),
        Rule::new(15, "masculine_consonant", masculine_consonant),
        Rule::new(16, "masculine_patronymic", masculine_patronymic),
        Rule::new(30, "feminine_adjectival", feminine_adjectival),
        Rule::new(31, "feminine_a", feminine_a),
        Rule::new(32, "feminine_soft_sign", feminine_soft_sign),
        Rule::new(33, "feminine_patronymic", feminine_patronymic),
    ]
}

/// Letters after which ы is spelled и.
fn takes_i(ch: char) -> bool {
    matches!(ch, 'г' | 'к' | 'х' | 'ж' | 'ч' | 'ш' | 'щ')
}

/// Letters after which unstressed о is spelled е.
fn takes_e(ch: char) -> bool {
    matches!(ch, 'ж' | 'ч' | 'ш' | 'щ' | 'ц')
}

fn penultimate(word: &WorkingWord<'_>) -> Option<char> {
    word.char_from_end(2)
}

// ---------- irregular ----------

fn irregular_masculine(lang: &Russian, word: &WorkingWord<'_>) -> Forms {
    lang.irregular().lookup(Gender::Masculine, word.as_str())
}

fn irregular_feminine(lang: &Russian, word: &WorkingWord<'_>) -> Forms {
    lang.irregular().lookup(Gender::Feminine, word.as_str())
}

// ---------- shared ----------

/// Nouns in -а and -я, regardless of gender (Никита, Анна, Илья, Мария).
fn a_declension(word: &WorkingWord<'_>) -> Forms {
    if word.len() < 2 {
        return None;
    }
    if word.ends_with("а") {
        let before = penultimate(word)?;
        let genitive = if takes_i(before) { "и" } else { "ы" };
        let instrumental = if takes_e(before) { "ей" } else { "ой" };
        return Some(word.forms(1, &[genitive, "е", "у", instrumental, "е"]));
    }
    if word.ends_with("ия") {
        return Some(word.forms(1, &["и", "и", "ю", "ей", "и"]));
    }
    if word.ends_with("я") {
        return Some(word.forms(1, &["и", "е", "ю", "ей", "е"]));
    }
    None
}

// ---------- masculine ----------

fn masculine_adjectival(_: &Russian, word: &WorkingWord<'_>) -> Forms {
    if word.len() < 4 {
        return None;
    }
    if word.ends_with("ий") {
        return Some(word.forms(2, &["ого", "ому", "ого", "им", "ом"]));
    }
    if word.ends_with_any(&["ой", "ый"]) {
        let instrumental = match penultimate_stem(word) {
            Some(ch) if takes_i(ch) => "им",
            _ => "ым",
        };
        return Some(word.forms(2, &["ого", "ому", "ого", instrumental, "ом"]));
    }
    None
}

/// Last letter of the stem of a two-letter ending.
fn penultimate_stem(word: &WorkingWord<'_>) -> Option<char> {
    word.char_from_end(3)
}

fn masculine_ov_in(_: &Russian, word: &WorkingWord<'_>) -> Forms {
    if word.len() < 4 || !word.ends_with_any(&["ов", "ев", "ёв", "ин", "ын"]) {
        return None;
    }
    Some(word.forms(0, &["а", "у", "а", "ым", "е"]))
}

fn masculine_soft_sign(lang: &Russian, word: &WorkingWord<'_>) -> Forms {
    if !word.ends_with("ь") || !lang.consonants().has(penultimate(word)) {
        return None;
    }
    Some(word.forms(1, &["я", "ю", "я", "ем", "е"]))
}

/// Андрей → Андрея; Дмитрий → Дмитрии in the prepositional.
fn masculine_yot(lang: &Russian, word: &WorkingWord<'_>) -> Forms {
    if !word.ends_with("й") || !lang.vowels().has(penultimate(word)) {
        return None;
    }
    if word.ends_with("ий") {
        return Some(word.forms(1, &["я", "ю", "я", "ем", "и"]));
    }
    Some(word.forms(1, &["я", "ю", "я", "ем", "е"]))
}

fn masculine_a(_: &Russian, word: &WorkingWord<'_>) -> Forms {
    a_declension(word)
}

fn masculine_consonant(lang: &Russian, word: &WorkingWord<'_>) -> Forms {
    let last = word.last_char()?;
    if word.len() < 2 || last == 'й' || !lang.consonants().contains(last) {
        return None;
    }
    if word.ends_with_any(&["ых", "их"]) {
        return None;
    }
    // Кузнец → Кузнецом: ц keeps о after a consonant stem.
    let instrumental = if last != 'ц' && takes_e(last) { "ем" } else { "ом" };
    Some(word.forms(0, &["а", "у", "а", instrumental, "е"]))
}

fn masculine_patronymic(_: &Russian, word: &WorkingWord<'_>) -> Forms {
    if word.len() < 4 || !word.ends_with("ич") {
        return None;
    }
    Some(word.forms(0, &["а", "у", "а", "ем", "е"]))
}

// ---------- feminine ----------

fn feminine_adjectival(_: &Russian, word: &WorkingWord<'_>) -> Forms {
    if word.len() < 5 {
        return None;
    }
    if word.ends_with_any(&["ова", "ева", "ёва", "ина", "ына"]) {
        return Some(word.forms(1, &["ой", "ой", "у", "ой", "ой"]));
    }
    if word.ends_with("ая") {
        return Some(word.forms(2, &["ой", "ой", "ую", "ой", "ой"]));
    }
    if word.ends_with("яя") {
        return Some(word.forms(2, &["ей", "ей", "юю", "ей", "ей"]));
    }
    None
}

fn feminine_a(_: &Russian, word: &WorkingWord<'_>) -> Forms {
    a_declension(word)
}

/// Любовь → Любови, Нинель → Нинелью.
fn feminine_soft_sign(_: &Russian, word: &WorkingWord<'_>) -> Forms {
    if word.len() < 3 || !word.ends_with("ь") {
        return None;
    }
    Some(word.forms(1, &["и", "и", "ь", "ью", "и"]))
}

fn feminine_patronymic(_: &Russian, word: &WorkingWord<'_>) -> Forms {
    if word.len() < 4 || !word.ends_with("на") {
        return None;
    }
    Some(word.forms(1, &["ы", "е", "у", "ой", "е"]))
}
