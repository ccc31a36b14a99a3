//! Property tests over arbitrary Russian words.
use namecase_core::Gender;
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[а-яё]{1,12}"
}

fn gender() -> impl Strategy<Value = Option<Gender>> {
    prop_oneof![
        Just(None),
        Just(Some(Gender::Masculine)),
        Just(Some(Gender::Feminine))
    ]
}

proptest! {
    #[test]
    fn every_part_yields_six_forms(w in word(), g in gender()) {
        let given = namecase_ru::decline_given_name(&w, None, g).unwrap().into_vec();
        let family = namecase_ru::decline_family_name(&w, None, g).unwrap().into_vec();
        let patronymic = namecase_ru::decline_patronymic(&w, None, g).unwrap().into_vec();
        for forms in [given, family, patronymic] {
            prop_assert_eq!(forms.len(), namecase_ru::CASE_COUNT);
            prop_assert_eq!(&forms[0], &w);
        }
    }

    #[test]
    fn uppercase_is_preserved(w in word(), g in gender()) {
        let upper = w.to_uppercase();
        for form in namecase_ru::decline_given_name(&upper, None, g).unwrap().into_vec() {
            prop_assert_eq!(form.to_uppercase(), form);
        }
    }

    #[test]
    fn single_case_matches_paradigm(w in word(), case in 0usize..6) {
        let all = namecase_ru::decline_family_name(&w, None, None).unwrap().into_vec();
        let one = namecase_ru::decline_family_name(&w, Some(case), None).unwrap();
        prop_assert_eq!(one.as_single(), Some(all[case].as_str()));
    }

    #[test]
    fn compounds_keep_every_hyphen(
        parts in proptest::collection::vec(word(), 2..=4),
        trailing in any::<bool>(),
        g in gender(),
    ) {
        let mut compound = parts.join("-");
        if trailing {
            compound.push('-');
        }
        let hyphens = parts.len() - 1 + usize::from(trailing);
        for form in namecase_ru::decline_family_name(&compound, None, g).unwrap().into_vec() {
            prop_assert_eq!(form.matches('-').count(), hyphens);
        }
    }
}
