//! Ukrainian case names.

use phf::phf_map;

pub const NOMINATIVE: usize = 0;
pub const GENITIVE: usize = 1;
pub const DATIVE: usize = 2;
pub const ACCUSATIVE: usize = 3;
pub const INSTRUMENTAL: usize = 4;
pub const LOCATIVE: usize = 5;
pub const VOCATIVE: usize = 6;

/// English, Ukrainian and abbreviated case names → case index.
static CASE_INDEX: phf::Map<&'static str, usize> = phf_map! {
    "nominative" => NOMINATIVE,
    "nom" => NOMINATIVE,
    "називний" => NOMINATIVE,
    "genitive" => GENITIVE,
    "gen" => GENITIVE,
    "родовий" => GENITIVE,
    "dative" => DATIVE,
    "dat" => DATIVE,
    "давальний" => DATIVE,
    "accusative" => ACCUSATIVE,
    "acc" => ACCUSATIVE,
    "знахідний" => ACCUSATIVE,
    "instrumental" => INSTRUMENTAL,
    "ins" => INSTRUMENTAL,
    "орудний" => INSTRUMENTAL,
    "locative" => LOCATIVE,
    "loc" => LOCATIVE,
    "місцевий" => LOCATIVE,
    "vocative" => VOCATIVE,
    "voc" => VOCATIVE,
    "кличний" => VOCATIVE,
};

/// Case index for a case name, or for a plain number in range.
pub fn case_index(name: &str) -> Option<usize> {
    let name = name.trim().to_lowercase();
    if let Ok(index) = name.parse::<usize>() {
        return (index <= VOCATIVE).then_some(index);
    }
    CASE_INDEX.get(name.as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_index() {
        assert_eq!(case_index("Genitive"), Some(GENITIVE));
        assert_eq!(case_index("кличний"), Some(VOCATIVE));
        assert_eq!(case_index("voc"), Some(6));
        assert_eq!(case_index("3"), Some(ACCUSATIVE));
        assert_eq!(case_index("7"), None);
        assert_eq!(case_index("prepositional"), None);
    }
}
