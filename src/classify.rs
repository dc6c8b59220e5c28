//! Classification of verbs by whether they can be regularly conjugated.

use std::collections::HashSet;
use std::fmt;

use crate::inflection::Ending;

/// Verbs which are known to be irregular by default.
pub const DEFAULT_IRREGULARS: &[&str] = &[
    "ser", "estar", "ter", "poder", "ir", "fazer", "dar", "dizer", "querer", "saber", "ver",
    "vir", "pôr",
];

/// The class of a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbClass {
    /// Ends in a regular ending and is not a known irregular verb.
    Regular,
    /// A known irregular verb.
    Irregular,
    /// Doesn't end in a regular ending.
    Unknown,
}

impl VerbClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerbClass::Regular => "regular",
            VerbClass::Irregular => "irregular",
            VerbClass::Unknown => "unknown",
        }
    }

    /// Test if regular conjugation applies.
    #[inline]
    pub fn is_regular(&self) -> bool {
        matches!(self, VerbClass::Regular)
    }
}

impl fmt::Display for VerbClass {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

/// A set of irregular verbs.
#[derive(Debug, Clone)]
pub struct Irregulars {
    verbs: HashSet<Box<str>>,
}

impl Irregulars {
    /// Construct a set of irregular verbs.
    pub fn new<I>(verbs: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            verbs: verbs.into_iter().map(|v| Box::from(v.as_ref())).collect(),
        }
    }

    /// Test if the given lemma is irregular.
    #[inline]
    pub fn contains(&self, lemma: &str) -> bool {
        self.verbs.contains(lemma)
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }
}

impl Default for Irregulars {
    fn default() -> Self {
        Self::new(DEFAULT_IRREGULARS)
    }
}

/// Classify a lemma.
pub fn classify(lemma: &str, irregulars: &Irregulars) -> VerbClass {
    if irregulars.contains(lemma) {
        return VerbClass::Irregular;
    }

    if Ending::from_lemma(lemma).is_some() {
        return VerbClass::Regular;
    }

    VerbClass::Unknown
}
