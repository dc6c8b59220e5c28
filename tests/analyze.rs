use std::collections::HashMap;

use ptv::analyze::{Features, Source};
use ptv::tagger::{ConlluTagger, Pos, Tagger, Token};
use ptv::{Analyzer, Error, Irregulars, Labels, VerbClass};

/// A tagger answering from a fixed table of sentences.
struct Fixed {
    sentences: HashMap<&'static str, Vec<Token>>,
}

impl Tagger for Fixed {
    fn tag(&self, sentence: &str) -> Result<Vec<Token>, Error> {
        match self.sentences.get(sentence) {
            Some(tokens) => Ok(tokens.clone()),
            None => ConlluTagger::default().tag(sentence),
        }
    }
}

fn tagger() -> Fixed {
    let mut sentences = HashMap::new();

    sentences.insert(
        "A garota sabe como ele encontrou o anel dela.",
        vec![
            Token::new("A", "o", Pos::parse("DET")),
            Token::new("garota", "garota", Pos::parse("NOUN")),
            Token::new("sabe", "saber", Pos::Verb)
                .with_feature("Mood", "Ind")
                .with_feature("Number", "Sing")
                .with_feature("Person", "3")
                .with_feature("Tense", "Pres")
                .with_feature("VerbForm", "Fin"),
            Token::new("como", "como", Pos::parse("ADV")),
            Token::new("ele", "ele", Pos::parse("PRON")),
            Token::new("encontrou", "encontrar", Pos::Verb),
            Token::new("o", "o", Pos::parse("DET")),
            Token::new("anel", "anel", Pos::parse("NOUN")),
            Token::new("dela", "dela", Pos::parse("ADP")),
            Token::new(".", ".", Pos::parse("PUNCT")),
        ],
    );

    sentences.insert(
        "Eles vão partir.",
        vec![
            Token::new("Eles", "eles", Pos::parse("PRON")),
            Token::new("vão", "ir", Pos::Aux).with_feature("Aspect", "Imp"),
            Token::new("partir", "partir", Pos::Verb).with_feature("VerbForm", "Inf"),
            Token::new(".", ".", Pos::parse("PUNCT")),
        ],
    );

    sentences.insert(
        "Eu durmo.",
        vec![
            Token::new("Eu", "eu", Pos::parse("PRON")),
            Token::new("durmo", "dormir", Pos::Verb),
        ],
    );

    sentences.insert("Bom dia.", vec![Token::new("Bom", "bom", Pos::parse("ADJ"))]);

    Fixed { sentences }
}

#[test]
fn features_take_precedence() {
    let analyzer = Analyzer::default();
    let verbs = analyzer
        .analyze(&tagger(), "A garota sabe como ele encontrou o anel dela.")
        .expect("tagged");

    assert_eq!(verbs.len(), 2);

    let sabe = &verbs[0];
    assert_eq!(sabe.text, "sabe");
    assert_eq!(sabe.class, VerbClass::Irregular);
    assert_eq!(sabe.source, Source::Tagger);
    assert_eq!(
        sabe.conjugation.as_deref(),
        Some("Third-Person Singular Present-Tense Indicative Finite")
    );
    assert_eq!(
        sabe.features,
        Features {
            person: Some("Third-Person"),
            number: Some("Singular"),
            tense: Some("Present-Tense"),
            mood: Some("Indicative"),
            verb_form: Some("Finite"),
        }
    );

    let encontrou = &verbs[1];
    assert_eq!(encontrou.class, VerbClass::Regular);
    assert_eq!(encontrou.source, Source::Paradigm);
    assert_eq!(
        encontrou.conjugation.as_deref(),
        Some("Second Person Singular Formal Past-Tense Simple")
    );
}

#[test]
fn irregular_verbs_without_features() {
    let verbs = Analyzer::default()
        .analyze(&tagger(), "Eles vão partir.")
        .expect("tagged");

    assert_eq!(verbs.len(), 2);

    let vao = &verbs[0];
    assert_eq!(vao.class, VerbClass::Irregular);
    assert_eq!(vao.source, Source::None);
    assert_eq!(vao.conjugation, None);

    let partir = &verbs[1];
    assert_eq!(partir.source, Source::Tagger);
    assert_eq!(partir.conjugation.as_deref(), Some("Infinitive"));
}

#[test]
fn regular_lemma_without_matching_form() {
    let verbs = Analyzer::default()
        .analyze(&tagger(), "Eu durmo.")
        .expect("tagged");

    assert_eq!(verbs.len(), 1);
    assert_eq!(verbs[0].class, VerbClass::Regular);
    assert_eq!(verbs[0].source, Source::None);
    assert_eq!(verbs[0].conjugation, None);
}

#[test]
fn configured_analyzer() {
    let mut labels = Labels::new();
    labels.set_person(ptv::Person::SecondSingularFormal, "você");

    let analyzer = Analyzer::new(Irregulars::new(["encontrar"]), labels);
    let verbs = analyzer
        .analyze(&tagger(), "A garota sabe como ele encontrou o anel dela.")
        .expect("tagged");

    assert_eq!(verbs[0].class, VerbClass::Regular);
    assert_eq!(verbs[1].class, VerbClass::Irregular);
    assert_eq!(verbs[1].conjugation, None);

    let analyzer = Analyzer::new(Irregulars::new(Vec::<String>::new()), {
        let mut labels = Labels::new();
        labels.set_person(ptv::Person::SecondSingularFormal, "você");
        labels
    });

    let verbs = analyzer
        .analyze(&tagger(), "A garota sabe como ele encontrou o anel dela.")
        .expect("tagged");

    assert_eq!(
        verbs[1].conjugation.as_deref(),
        Some("você Past-Tense Simple")
    );
}

#[test]
fn sentence_without_verbs() {
    let verbs = Analyzer::default()
        .analyze(&tagger(), "Bom dia.")
        .expect("tagged");
    assert!(verbs.is_empty());
}

#[test]
fn tagger_failures_are_not_empty_results() {
    let error = Analyzer::default()
        .analyze(&tagger(), "Frase desconhecida.")
        .unwrap_err();
    assert!(error.is_unknown_sentence());

    let dir = tempfile::tempdir().expect("tempdir");
    let error = ConlluTagger::open(&dir.path().join("missing.conllu"))
        .err()
        .expect("missing");
    assert!(error.is_oracle_unavailable());
}

#[test]
fn analyze_tagged_file() {
    let input = "\
# text = Nós vendemos livros.
1\tNós\teu\tPRON\t_\tNumber=Plur|Person=1\t2\tnsubj\t_\t_
2\tvendemos\tvender\tVERB\t_\t_\t0\troot\t_\t_
3\tlivros\tlivro\tNOUN\t_\tNumber=Plur\t2\tobj\t_\tSpaceAfter=No
4\t.\t.\tPUNCT\t_\t_\t2\tpunct\t_\t_
";

    let tagger = ConlluTagger::parse(input);
    let verbs = Analyzer::default()
        .analyze(&tagger, "Nós vendemos livros.")
        .expect("tagged");

    assert_eq!(verbs.len(), 1);
    assert_eq!(verbs[0].source, Source::Paradigm);
    assert_eq!(
        verbs[0].conjugation.as_deref(),
        Some("First Person Plural Past-Tense Simple")
    );
}
