//! End-to-end Ukrainian declension through the public API:
//! one-shot helpers, the engine, templates, compounds and the registry.
use std::sync::Arc;

use namecase_core::{CaseOutput, Gender, LanguageModule, LanguageRegistry, NamePart, Stage};
use namecase_uk::{cases, Ukrainian};

#[test]
fn full_name_genitive_and_vocative() {
    let genitive =
        namecase_uk::decline_full_name("Шевченко Тарас Григорович", Some(cases::GENITIVE), None)
            .unwrap();
    assert_eq!(genitive.as_single(), Some("Шевченка Тараса Григоровича"));

    let vocative =
        namecase_uk::decline_full_name("Шевченко Тарас Григорович", Some(cases::VOCATIVE), None)
            .unwrap();
    assert_eq!(vocative.as_single(), Some("Шевченче Тарасе Григоровичу"));
}

#[test]
fn full_name_keeps_input_order() {
    let out = namecase_uk::decline_full_name("Тарас Шевченко", Some(cases::DATIVE), None).unwrap();
    assert_eq!(out.as_single(), Some("Тарасу Шевченку"));
}

#[test]
fn feminine_full_name() {
    let out =
        namecase_uk::decline_full_name("Іванова Олена Петрівна", Some(cases::DATIVE), None)
            .unwrap();
    assert_eq!(out.as_single(), Some("Івановій Олені Петрівні"));
    assert_eq!(
        namecase_uk::detect_gender("Іванова Олена Петрівна").unwrap(),
        Some(Gender::Feminine)
    );
}

#[test]
fn patronymic_decides_gender() {
    assert_eq!(
        namecase_uk::detect_gender("Григорович").unwrap(),
        Some(Gender::Masculine)
    );
    assert_eq!(
        namecase_uk::detect_gender("Петрівна").unwrap(),
        Some(Gender::Feminine)
    );
}

#[test]
fn gender_tie_is_feminine() {
    // No hint matches: no evidence either way.
    assert_eq!(
        namecase_uk::detect_gender("Ґудзь").unwrap(),
        Some(Gender::Feminine)
    );
    assert_eq!(namecase_uk::detect_gender("").unwrap(), None);
}

#[test]
fn case_index_edges() {
    let nominative = namecase_uk::decline_given_name("Тарас", Some(cases::NOMINATIVE), None).unwrap();
    assert_eq!(nominative, CaseOutput::Single("Тарас".into()));

    let all = namecase_uk::decline_given_name("Тарас", None, None).unwrap();
    assert_eq!(
        all.as_all().unwrap(),
        &["Тарас", "Тараса", "Тарасу", "Тараса", "Тарасом", "Тарасові", "Тарасе"]
    );
    let out_of_range = namecase_uk::decline_given_name("Тарас", Some(7), None).unwrap();
    assert_eq!(out_of_range, all);
}

#[test]
fn explicit_gender_overrides_detection() {
    // Left alone, the name reads feminine.
    let auto = namecase_uk::decline_family_name("Іванова", Some(cases::GENITIVE), None).unwrap();
    assert_eq!(auto.as_single(), Some("Іванової"));

    let masc = namecase_uk::decline_family_name("Коваль", Some(cases::GENITIVE), Some(Gender::Masculine))
        .unwrap();
    assert_eq!(masc.as_single(), Some("Коваля"));
    let fem = namecase_uk::decline_family_name("Коваль", Some(cases::GENITIVE), Some(Gender::Feminine))
        .unwrap();
    assert_eq!(fem.as_single(), Some("Коваль"));
}

#[test]
fn uppercase_input_stays_uppercase() {
    let out = namecase_uk::decline_full_name("ШЕВЧЕНКО ТАРАС", Some(cases::LOCATIVE), None).unwrap();
    assert_eq!(out.as_single(), Some("ШЕВЧЕНКОВІ ТАРАСОВІ"));
}

#[test]
fn compound_family_names() {
    let out = namecase_uk::decline_family_name(
        "Римський-Корсаков",
        Some(cases::GENITIVE),
        Some(Gender::Masculine),
    )
    .unwrap();
    assert_eq!(out.as_single(), Some("Римського-Корсакова"));

    // The head does not look like a surname and stays as written.
    let out = namecase_uk::decline_family_name(
        "Квітка-Основ'яненко",
        Some(cases::GENITIVE),
        Some(Gender::Masculine),
    )
    .unwrap();
    assert_eq!(out.as_single(), Some("Квітка-Основ'яненка"));

    let out = namecase_uk::decline_family_name(
        "Квітка-Основ'яненко-Петренко",
        Some(cases::GENITIVE),
        Some(Gender::Masculine),
    )
    .unwrap();
    assert_eq!(out.as_single(), Some("Квітка-Основ'яненка-Петренка"));
}

#[test]
fn template_literals_are_kept() {
    let mut engine = namecase_uk::engine().unwrap();
    engine
        .set_family_name("Шевченко")
        .set_given_name("Тарас")
        .set_patronymic("Григорович");
    assert_eq!(
        engine.formatted(Some(cases::GENITIVE), "  S N F  ").as_single(),
        Some("  Шевченка Тараса Григоровича  ")
    );
    assert_eq!(
        engine.formatted(Some(cases::GENITIVE), "(S) N").as_single(),
        Some("(Шевченка) Тараса")
    );
}

#[test]
fn engine_session_with_templates() {
    let mut engine = namecase_uk::engine().unwrap();
    engine
        .set_family_name("Шевченко")
        .set_given_name("Тарас")
        .set_patronymic("Григорович");

    assert_eq!(engine.gender(), Some(Gender::Masculine));
    assert_eq!(
        engine.formatted(Some(cases::VOCATIVE), "N F").as_single(),
        Some("Тарасе Григоровичу")
    );
    assert_eq!(
        engine.formatted_default(Some(cases::INSTRUMENTAL)).as_single(),
        Some("Шевченком Тарасом Григоровичем")
    );
    assert_eq!(engine.stage(), Stage::Formatted);
    assert_eq!(engine.family_names(), "Шевченко");

    let given = engine.records().iter().find(|r| r.is_part(NamePart::Given)).unwrap();
    assert_eq!(given.case_forms().len(), namecase_uk::CASE_COUNT);
    assert!(given.applied_rule().is_some());
}

#[test]
fn split_full_name_labels_parts() {
    let mut engine = namecase_uk::engine().unwrap();
    let ids = engine.split_full_name("Григорович Тарас Шевченко");
    let parts: Vec<_> = ids
        .iter()
        .map(|id| engine.record(*id).unwrap().part())
        .collect();
    assert_eq!(
        parts,
        vec![
            Some(NamePart::Patronymic),
            Some(NamePart::Given),
            Some(NamePart::Family)
        ]
    );
    assert_eq!(
        engine.formatted_default(Some(cases::GENITIVE)).as_single(),
        Some("Шевченка Тараса Григоровича")
    );
}

#[test]
fn decomposed_input_is_normalized() {
    // "й" written as и + combining breve.
    let out = namecase_uk::decline_given_name("Андріи\u{306}", Some(cases::GENITIVE), None).unwrap();
    assert_eq!(out.as_single(), Some("Андрія"));
}

#[test]
fn registry_resolves_aliases() {
    let mut registry = LanguageRegistry::new();
    registry.register(Arc::new(Ukrainian::new().unwrap())).unwrap();

    assert_eq!(registry.get("UA").unwrap().code(), "uk");
    assert_eq!(registry.get("ukrainian").unwrap().case_count(), 7);

    let lang = registry.get("uk").unwrap();
    assert_eq!(lang.case_index("кличний"), Some(cases::VOCATIVE));

    let mut engine = registry.engine("uk").unwrap();
    engine.set_given_name("Олена");
    assert_eq!(engine.given_name_case(Some(cases::VOCATIVE)).as_single(), Some("Олено"));
}
