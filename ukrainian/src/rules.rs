//! Ukrainian declension rules.
//!
//! Every rule receives the lowercase working word and returns the seven
//! forms (nominative, genitive, dative, accusative, instrumental, locative,
//! vocative) or `None` when the word does not have its shape. Which rules
//! run, and in which order, is decided by the chain table in
//! `data/ukrainian.toml`.

use namecase_core::{Gender, LanguageModule, Rule, WorkingWord};

use crate::language::Ukrainian;

type Forms = Option<Vec<String>>;

/// All rules known to the Ukrainian module.
pub(crate) fn all() -> Vec<Rule<Ukrainian>> {
    vec![
        Rule::new(1, "irregular_masculine", irregular_masculine),
        Rule::new(2, "irregular_feminine", irregular_feminine),
        Rule::new(10, "masculine_adjectival", masculine_adjectival),
        Rule::new(11, "masculine_ets", masculine_ets),
        Rule::new(12, "masculine_ov_in", masculine_ov_in),
        Rule::new(13, "masculine_soft_sign", masculine_soft_sign),
        Rule::new(14, "masculine_yot", masculine_yot),
        Rule::new(15, "masculine_a", masculine_a),
        Rule::new(16, "masculine_ya", masculine_ya),
        Rule::new(17, "masculine_given_o", masculine_given_o),
        Rule::new(18, "masculine_family_o", masculine_family_o),
        Rule::new(19, "masculine_given_consonant", masculine_given_consonant),
        Rule::new(20, "masculine_family_consonant", masculine_family_consonant),
        Rule::new(21, "masculine_patronymic", masculine_patronymic),
        Rule::new(30, "feminine_adjectival", feminine_adjectival),
        Rule::new(31, "feminine_a", feminine_a),
        Rule::new(32, "feminine_ya", feminine_ya),
        Rule::new(33, "feminine_consonant", feminine_consonant),
        Rule::new(34, "feminine_patronymic", feminine_patronymic),
    ]
}

// ---------- letter classes ----------

fn is_hushing(ch: char) -> bool {
    matches!(ch, 'ж' | 'ч' | 'ш' | 'щ')
}

fn is_velar(ch: char) -> bool {
    matches!(ch, 'г' | 'ґ' | 'к' | 'х')
}

fn is_labial(ch: char) -> bool {
    matches!(ch, 'б' | 'п' | 'в' | 'м' | 'ф')
}

/// г/к/х before -і in the dative and locative: Ольга → Ользі.
fn soften_velar(ch: char) -> char {
    match ch {
        'г' | 'ґ' => 'з',
        'к' => 'ц',
        'х' => 'с',
        other => other,
    }
}

/// г/к/х before the -е vocative: Шевченко → Шевченче.
fn vocative_velar(ch: char) -> char {
    match ch {
        'г' | 'ґ' => 'ж',
        'к' => 'ч',
        'х' => 'ш',
        other => other,
    }
}

fn penultimate(word: &WorkingWord<'_>) -> Option<char> {
    word.char_from_end(2)
}

// ---------- irregular ----------

fn irregular_masculine(lang: &Ukrainian, word: &WorkingWord<'_>) -> Forms {
    lang.irregular().lookup(Gender::Masculine, word.as_str())
}

fn irregular_feminine(lang: &Ukrainian, word: &WorkingWord<'_>) -> Forms {
    lang.irregular().lookup(Gender::Feminine, word.as_str())
}

// ---------- shared paradigms ----------

/// First-declension nouns in -а (Микола, Олена, Ольга).
fn a_declension(word: &WorkingWord<'_>) -> Forms {
    if word.len() < 2 || !word.ends_with("а") {
        return None;
    }
    let before = penultimate(word)?;
    if is_hushing(before) {
        return Some(word.forms(1, &["і", "і", "у", "ею", "і", "о"]));
    }
    if is_velar(before) {
        let soft = format!("{}{}і", word.stem(2), soften_velar(before));
        let mut forms = word.forms(1, &["и", "", "у", "ою", "", "о"]);
        forms[2] = soft.clone();
        forms[5] = soft;
        return Some(forms);
    }
    Some(word.forms(1, &["и", "і", "у", "ою", "і", "о"]))
}

/// Nouns in -я. After a vowel the endings take the iotated letters
/// (Марія → Марії).
fn ya_declension(lang: &Ukrainian, word: &WorkingWord<'_>, vocative: &str) -> Forms {
    if word.len() < 2 || !word.ends_with("я") {
        return None;
    }
    if lang.vowels().has(penultimate(word)) {
        return Some(word.forms(1, &["ї", "ї", "ю", "єю", "ї", "є"]));
    }
    Some(word.forms(1, &["і", "і", "ю", "ею", "і", vocative]))
}

// ---------- masculine ----------

fn masculine_adjectival(_: &Ukrainian, word: &WorkingWord<'_>) -> Forms {
    if word.len() < 4 {
        return None;
    }
    if word.ends_with("ий") {
        return Some(word.forms(2, &["ого", "ому", "ого", "им", "ому", "ий"]));
    }
    if word.ends_with("ій") {
        return Some(word.forms(2, &["ього", "ьому", "ього", "ім", "ьому", "ій"]));
    }
    None
}

/// -ець with the fleeting е: Кравець → Кравця.
fn masculine_ets(lang: &Ukrainian, word: &WorkingWord<'_>) -> Forms {
    if word.len() < 5 || !word.ends_with("ець") || !lang.consonants().has(word.char_from_end(4)) {
        return None;
    }
    let stem = format!("{}ц", word.stem(3));
    let mut forms = vec![word.as_str().to_string()];
    forms.extend(["я", "ю", "я", "ем", "еві", "ю"].iter().map(|e| format!("{stem}{e}")));
    Some(forms)
}

fn masculine_ov_in(_: &Ukrainian, word: &WorkingWord<'_>) -> Forms {
    if word.len() < 4 || !word.ends_with_any(&["ов", "ев", "єв", "ин", "ін", "їн"]) {
        return None;
    }
    Some(word.forms(0, &["а", "у", "а", "им", "і", "е"]))
}

fn masculine_soft_sign(lang: &Ukrainian, word: &WorkingWord<'_>) -> Forms {
    if !word.ends_with("ь") || !lang.consonants().has(penultimate(word)) {
        return None;
    }
    Some(word.forms(1, &["я", "ю", "я", "ем", "еві", "ю"]))
}

fn masculine_yot(lang: &Ukrainian, word: &WorkingWord<'_>) -> Forms {
    if !word.ends_with("й") || !lang.vowels().has(penultimate(word)) {
        return None;
    }
    Some(word.forms(1, &["я", "ю", "я", "єм", "єві", "ю"]))
}

fn masculine_a(_: &Ukrainian, word: &WorkingWord<'_>) -> Forms {
    a_declension(word)
}

fn masculine_ya(lang: &Ukrainian, word: &WorkingWord<'_>) -> Forms {
    ya_declension(lang, word, "е")
}

fn o_stem(word: &WorkingWord<'_>) -> Option<Vec<String>> {
    if word.len() < 3 || !word.ends_with("о") {
        return None;
    }
    Some(word.forms(1, &["а", "у", "а", "ом", "ові", "е"]))
}

/// Петро → Петре, Юрко → Юрку.
fn masculine_given_o(_: &Ukrainian, word: &WorkingWord<'_>) -> Forms {
    let mut forms = o_stem(word)?;
    if penultimate(word) == Some('к') {
        forms[6] = format!("{}у", word.stem(1));
    }
    Some(forms)
}

/// Шевченко → Шевченче.
fn masculine_family_o(_: &Ukrainian, word: &WorkingWord<'_>) -> Forms {
    let mut forms = o_stem(word)?;
    if let Some(before) = penultimate(word).filter(|c| is_velar(*c)) {
        forms[6] = format!("{}{}е", word.stem(2), vocative_velar(before));
    }
    Some(forms)
}

/// Second-declension hard and mixed stems. Names in -г take the -же
/// vocative (Олег → Олеже); surnames keep -у.
fn consonant_stem(lang: &Ukrainian, word: &WorkingWord<'_>, given: bool) -> Forms {
    let last = word.last_char()?;
    if word.len() < 2 || last == 'й' || !lang.consonants().contains(last) {
        return None;
    }
    if is_hushing(last) {
        return Some(word.forms(0, &["а", "у", "а", "ем", "еві", "у"]));
    }
    if is_velar(last) {
        let mut forms = word.forms(0, &["а", "у", "а", "ом", "ові", "у"]);
        if given && matches!(last, 'г' | 'ґ') {
            forms[6] = format!("{}же", word.stem(1));
        }
        return Some(forms);
    }
    Some(word.forms(0, &["а", "у", "а", "ом", "ові", "е"]))
}

fn masculine_given_consonant(lang: &Ukrainian, word: &WorkingWord<'_>) -> Forms {
    consonant_stem(lang, word, true)
}

fn masculine_family_consonant(lang: &Ukrainian, word: &WorkingWord<'_>) -> Forms {
    consonant_stem(lang, word, false)
}

fn masculine_patronymic(_: &Ukrainian, word: &WorkingWord<'_>) -> Forms {
    if !word.ends_with_any(&["ич", "іч"]) {
        return None;
    }
    Some(word.forms(0, &["а", "у", "а", "ем", "у", "у"]))
}

// ---------- feminine ----------

fn feminine_adjectival(_: &Ukrainian, word: &WorkingWord<'_>) -> Forms {
    if word.len() < 5 {
        return None;
    }
    if word.ends_with_any(&["ська", "цька", "зька"])
        || word.ends_with_any(&["ова", "ева", "єва", "іна", "їна", "ина"])
    {
        return Some(word.forms(1, &["ої", "ій", "у", "ою", "ій", "а"]));
    }
    None
}

fn feminine_a(_: &Ukrainian, word: &WorkingWord<'_>) -> Forms {
    a_declension(word)
}

/// Оля → Олю in the vocative, Марія → Маріє.
fn feminine_ya(lang: &Ukrainian, word: &WorkingWord<'_>) -> Forms {
    ya_declension(lang, word, "ю")
}

/// Third-declension names: Нінель → Нінеллю, Любов → Любов'ю.
fn feminine_consonant(lang: &Ukrainian, word: &WorkingWord<'_>) -> Forms {
    if word.len() < 3 {
        return None;
    }
    if word.ends_with("ь") {
        let stem = word.stem(1);
        let doubled = match penultimate(word).filter(|c| lang.consonants().contains(*c)) {
            Some(c) => format!("{stem}{c}ю"),
            None => format!("{stem}ю"),
        };
        let mut forms = word.forms(1, &["і", "і", "ь", "", "і", "е"]);
        forms[4] = doubled;
        return Some(forms);
    }
    let last = word.last_char()?;
    if is_labial(last) {
        return Some(word.forms(0, &["і", "і", "", "'ю", "і", "е"]));
    }
    None
}

fn feminine_patronymic(_: &Ukrainian, word: &WorkingWord<'_>) -> Forms {
    if word.len() < 4 || !word.ends_with("на") {
        return None;
    }
    Some(word.forms(1, &["и", "і", "у", "ою", "і", "о"]))
}
