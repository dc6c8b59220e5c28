use ptv::inflection::Ending;
use ptv::{classify, conjugate, format_label, match_regular, FormKey, Irregulars, VerbClass};

#[test]
fn falar() {
    let falar = conjugate("falar");
    let key = FormKey::parse("1SG-PSTSimple").expect("key");
    assert_eq!(falar.get(key).expect("form"), "falei");
    assert_eq!(format_label(key), "First Person Singular Past-Tense Simple");
    assert_eq!(
        match_regular("falei", "falar").as_deref(),
        Some("First Person Singular Past-Tense Simple")
    );
    assert_eq!(match_regular("xyz", "falar"), None);
}

#[test]
fn comer() {
    let comer = conjugate("comer");
    let key = FormKey::parse("3PL-PRSTSub").expect("key");
    assert_eq!(comer.get(key).expect("form"), "comam");
}

#[test]
fn classes() {
    let irregulars = Irregulars::default();
    assert_eq!(classify("ser", &irregulars), VerbClass::Irregular);
    assert_eq!(classify("falar", &irregulars), VerbClass::Regular);
    assert_eq!(classify("xyz", &irregulars), VerbClass::Unknown);
}

#[test]
fn classified_lemmas_conjugate_consistently() {
    let irregulars = Irregulars::new(Vec::<&str>::new());

    for lemma in ["falar", "bater", "abrir", "ir", "ver", "pôr", "estudante", ""] {
        let class = classify(lemma, &irregulars);
        let conjugations = conjugate(lemma);

        assert_eq!(class.is_regular(), conjugations.is_recognized(), "{lemma:?}");
        assert_eq!(conjugations.len(), if class.is_regular() { 33 } else { 1 });
        assert_eq!(
            conjugations.paradigm().map(|p| p.ending()),
            Ending::from_lemma(lemma).map(|(_, e)| e)
        );
    }
}

#[test]
fn every_form_matches_back() {
    for lemma in ["falar", "bater", "abrir"] {
        let conjugations = conjugate(lemma);

        for (key, form) in conjugations.iter() {
            let label = match_regular(&form.to_string(), lemma).expect("form matches");

            // Identical forms resolve to the earliest cell producing them.
            let first = conjugations
                .iter()
                .position(|(_, other)| other == form)
                .expect("present");
            let own = conjugations
                .iter()
                .position(|(other, _)| other == key)
                .expect("present");

            assert!(first <= own, "{lemma} / {key}");
            let (earliest, _) = conjugations.iter().nth(first).expect("present");
            assert_eq!(label, format_label(earliest));
        }
    }
}
