//! Interface to an external morphological tagger.
//!
//! The tagger is an oracle which supplies the lemma, coarse part of speech and
//! morphological features of each token in a sentence. It is consulted but
//! never implemented here; [`ConlluTagger`] serves analyses that have been
//! produced ahead of time.

pub use self::conllu::ConlluTagger;
mod conllu;


use std::collections::BTreeMap;
use std::fmt;

use crate::Error;

/// A morphological tagger.
pub trait Tagger {
    /// Tag every token in the given sentence.
    ///
    /// Errors must be reported as such, never as an empty list of tokens.
    fn tag(&self, sentence: &str) -> Result<Vec<Token>, Error>;
}

impl<T> Tagger for &T
where
    T: ?Sized + Tagger,
{
    #[inline]
    fn tag(&self, sentence: &str) -> Result<Vec<Token>, Error> {
        (**self).tag(sentence)
    }
}

/// Coarse universal part of speech tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pos {
    Verb,
    Aux,
    Other(Box<str>),
}

impl Pos {
    /// Parse a universal part of speech tag such as `VERB`.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "VERB" => Pos::Verb,
            "AUX" => Pos::Aux,
            other => Pos::Other(other.into()),
        }
    }

    /// Test if this is a verb or an auxiliary verb.
    #[inline]
    pub fn is_verbal(&self) -> bool {
        matches!(self, Pos::Verb | Pos::Aux)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Pos::Verb => "VERB",
            Pos::Aux => "AUX",
            Pos::Other(tag) => tag,
        }
    }
}

impl fmt::Display for Pos {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

/// A tagged token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface text.
    pub text: String,
    /// Lemma as determined by the tagger.
    pub lemma: String,
    pub pos: Pos,
    /// Morphological features, such as `Person` or `Tense`, each with one or
    /// more values.
    pub features: BTreeMap<String, Vec<String>>,
}

impl Token {
    pub fn new(text: impl Into<String>, lemma: impl Into<String>, pos: Pos) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos,
            features: BTreeMap::new(),
        }
    }

    /// Add a feature value.
    pub fn with_feature(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.features
            .entry(name.into())
            .or_default()
            .push(value.into());
        self
    }

    /// Get the first value of a feature.
    pub fn feature(&self, name: &str) -> Option<&str> {
        self.features.get(name)?.first().map(String::as_str)
    }
}
