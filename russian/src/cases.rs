//! Russian case names.

use phf::phf_map;

pub const NOMINATIVE: usize = 0;
pub const GENITIVE: usize = 1;
pub const DATIVE: usize = 2;
pub const ACCUSATIVE: usize = 3;
pub const INSTRUMENTAL: usize = 4;
pub const PREPOSITIONAL: usize = 5;

static CASE_INDEX: phf::Map<&'static str, usize> = phf_map! {
    "nominative" => NOMINATIVE,
    "nom" => NOMINATIVE,
    "именительный" => NOMINATIVE,
    "genitive" => GENITIVE,
    "gen" => GENITIVE,
    "родительный" => GENITIVE,
    "dative" => DATIVE,
    "dat" => DATIVE,
    "дательный" => DATIVE,
    "accusative" => ACCUSATIVE,
    "acc" => ACCUSATIVE,
    "винительный" => ACCUSATIVE,
    "instrumental" => INSTRUMENTAL,
    "ins" => INSTRUMENTAL,
    "творительный" => INSTRUMENTAL,
    "prepositional" => PREPOSITIONAL,
    "prep" => PREPOSITIONAL,
    "locative" => PREPOSITIONAL,
    "предложный" => PREPOSITIONAL,
};

/// Case index for a case name, or for a plain number in range.
pub fn case_index(name: &str) -> Option<usize> {
    let name = name.trim().to_lowercase();
    if let Ok(index) = name.parse::<usize>() {
        return (index <= PREPOSITIONAL).then_some(index);
    }
    CASE_INDEX.get(name.as_str()).copied()
}
