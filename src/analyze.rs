//! Explain the conjugation of verbs in a sentence.
//!
//! Conjugations are described from the tagger's morphological features. When
//! the tagger doesn't provide any, regular verbs fall back to matching against
//! their generated paradigm.

use crate::classify::{classify, Irregulars, VerbClass};
use crate::labels::Labels;
use crate::matcher::Matcher;
use crate::tagger::{Tagger, Token};
use crate::Error;

/// Where the description of a conjugation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Morphological features reported by the tagger.
    Tagger,
    /// A match against the regular paradigm of the lemma.
    Paradigm,
    /// No description could be produced.
    None,
}

/// Human-readable morphological features.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Features {
    pub person: Option<&'static str>,
    pub number: Option<&'static str>,
    pub tense: Option<&'static str>,
    pub mood: Option<&'static str>,
    pub verb_form: Option<&'static str>,
}

impl Features {
    /// Translate the features of a token.
    ///
    /// Only the first value of each feature is considered and values which are
    /// not recognized are dropped.
    pub fn from_token(token: &Token) -> Self {
        Self {
            person: token.feature("Person").and_then(person),
            number: token.feature("Number").and_then(number),
            tense: token.feature("Tense").and_then(tense),
            mood: token.feature("Mood").and_then(mood),
            verb_form: token.feature("VerbForm").and_then(verb_form),
        }
    }

    /// Describe the features, such as `Third-Person Singular Past-Tense
    /// Indicative Finite`.
    pub fn describe(&self) -> String {
        let parts = [
            self.person,
            self.number,
            self.tense,
            self.mood,
            self.verb_form,
        ];

        parts.into_iter().flatten().collect::<Vec<_>>().join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.describe().is_empty()
    }
}

fn person(value: &str) -> Option<&'static str> {
    match value {
        "1" => Some("First-Person"),
        "2" => Some("Second-Person"),
        "3" => Some("Third-Person"),
        _ => None,
    }
}

fn number(value: &str) -> Option<&'static str> {
    match value {
        "Sing" => Some("Singular"),
        "Plur" => Some("Plural"),
        _ => None,
    }
}

fn tense(value: &str) -> Option<&'static str> {
    match value {
        "Pres" => Some("Present-Tense"),
        "Past" => Some("Past-Tense"),
        "Fut" => Some("Future-Tense"),
        _ => None,
    }
}

fn mood(value: &str) -> Option<&'static str> {
    match value {
        "Ind" => Some("Indicative"),
        "Imp" => Some("Imperative"),
        "Sub" => Some("Subjunctive"),
        "Cnd" => Some("Conditional"),
        _ => None,
    }
}

fn verb_form(value: &str) -> Option<&'static str> {
    match value {
        "Fin" => Some("Finite"),
        "Inf" => Some("Infinitive"),
        "Part" => Some("Participle"),
        "Ger" => Some("Gerund"),
        _ => None,
    }
}

/// The analysis of a single verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbAnalysis {
    /// Surface text of the verb.
    pub text: String,
    pub lemma: String,
    pub class: VerbClass,
    pub features: Features,
    /// Description of the conjugation, if one could be determined.
    pub conjugation: Option<String>,
    pub source: Source,
}

/// Analyzes sentences using a tagger together with regular conjugation.
#[derive(Default)]
pub struct Analyzer {
    irregulars: Irregulars,
    matcher: Matcher,
}

impl Analyzer {
    pub fn new(irregulars: Irregulars, labels: Labels) -> Self {
        Self {
            irregulars,
            matcher: Matcher::new(labels),
        }
    }

    /// Analyze every verb in the sentence.
    ///
    /// Failures of the tagger are propagated, so an empty result always means
    /// that the sentence has no verbs.
    pub fn analyze<T>(&self, tagger: &T, sentence: &str) -> Result<Vec<VerbAnalysis>, Error>
    where
        T: ?Sized + Tagger,
    {
        let tokens = tagger.tag(sentence)?;
        Ok(tokens.iter().filter_map(|t| self.analyze_token(t)).collect())
    }

    /// Analyze a single token, returning `None` if it isn't a verb.
    pub fn analyze_token(&self, token: &Token) -> Option<VerbAnalysis> {
        if !token.pos.is_verbal() {
            return None;
        }

        let class = classify(&token.lemma, &self.irregulars);
        let features = Features::from_token(token);
        let description = features.describe();

        let (conjugation, source) = if !description.is_empty() {
            (Some(description), Source::Tagger)
        } else if class.is_regular() {
            match self.matcher.describe(&token.text, &token.lemma) {
                Some(label) => (Some(label), Source::Paradigm),
                None => (None, Source::None),
            }
        } else {
            (None, Source::None)
        };

        tracing::trace!(text = %token.text, lemma = %token.lemma, ?class, ?source);

        Some(VerbAnalysis {
            text: token.text.clone(),
            lemma: token.lemma.clone(),
            class,
            features,
            conjugation,
            source,
        })
    }
}
