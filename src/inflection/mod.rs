//! Regular conjugation of Portuguese verbs, based on their ending class.

pub mod table;

pub use self::conjugate::{conjugate, Conjugations, Paradigm};
mod conjugate;


use std::fmt;

use fixed_map::Key;

macro_rules! code {
    ($vis:vis enum $name:ident { $({$variant:ident, $code:literal, $label:literal}),* $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Key)]
        $vis enum $name {
            $($variant,)*
        }

        impl $name {
            /// All values in declaration order.
            $vis const ALL: &'static [$name] = &[
                $($name::$variant,)*
            ];

            /// Short code, as used in textual keys.
            $vis fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)*
                }
            }

            /// Default human-readable label.
            $vis fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)*
                }
            }

            /// Parse a short code.
            $vis fn parse(code: &str) -> Option<$name> {
                match code {
                    $($code => Some($name::$variant),)*
                    _ => None,
                }
            }

            #[inline]
            pub(crate) fn index(&self) -> usize {
                *self as usize
            }
        }

        impl fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.code().fmt(f)
            }
        }
    }
}

code! {
    pub enum Person {
        {FirstSingular, "1SG", "First Person Singular"},
        {SecondSingularInformal, "2SG-Inf", "Second Person Singular Informal"},
        {SecondSingularFormal, "2SG-For", "Second Person Singular Formal"},
        {ThirdSingular, "3SG", "Third Person Singular"},
        {FirstPlural, "1PL", "First Person Plural"},
        {SecondPluralInformal, "2PL-Inf", "Second Person Plural Informal"},
        {SecondPluralFormal, "2PL-For", "Second Person Plural Formal"},
        {ThirdPlural, "3PL", "Third Person Plural"},
    }
}

code! {
    pub enum Tense {
        {PastSimple, "PSTSimple", "Past-Tense Simple"},
        {PastImperfect, "PSTImperfect", "Past-Tense Imperfect"},
        {PresentIndicative, "PRSTInd", "Present-Tense Indicative"},
        {PresentSubjunctive, "PRSTSub", "Present-Tense Subjunctive"},
    }
}

/// The ending class of a verb, which selects the paradigm used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ending {
    Ar,
    Er,
    Ir,
}

impl Ending {
    pub const ALL: &'static [Ending] = &[Ending::Ar, Ending::Er, Ending::Ir];

    /// The literal ending.
    pub fn code(&self) -> &'static str {
        match self {
            Ending::Ar => "ar",
            Ending::Er => "er",
            Ending::Ir => "ir",
        }
    }

    /// Parse a two-letter ending.
    pub fn parse(code: &str) -> Option<Ending> {
        match code {
            "ar" => Some(Ending::Ar),
            "er" => Some(Ending::Er),
            "ir" => Some(Ending::Ir),
            _ => None,
        }
    }

    /// Split a lemma into its stem and ending class.
    ///
    /// The stem may be empty if the lemma consists only of the ending.
    pub fn from_lemma(lemma: &str) -> Option<(&str, Ending)> {
        Ending::ALL
            .iter()
            .find_map(|&ending| Some((lemma.strip_suffix(ending.code())?, ending)))
    }
}

impl fmt::Display for Ending {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.code().fmt(f)
    }
}

/// A single cell in a paradigm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub person: Person,
    pub tense: Tense,
}

impl Cell {
    #[inline]
    pub const fn new(person: Person, tense: Tense) -> Self {
        Self { person, tense }
    }

    /// Iterate over all cells in table order, tense-major.
    pub fn all() -> impl Iterator<Item = Cell> {
        Tense::ALL
            .iter()
            .flat_map(|&tense| Person::ALL.iter().map(move |&person| Cell::new(person, tense)))
    }
}

impl fmt::Display for Cell {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.person, self.tense)
    }
}

/// The key of a generated form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormKey {
    /// The bare infinitive.
    Infinitive,
    /// An inflected form.
    Cell(Cell),
}

impl FormKey {
    const INFINITIVE: &'static str = "Infinitive";

    /// Construct the key for an inflected form.
    #[inline]
    pub const fn cell(person: Person, tense: Tense) -> Self {
        Self::Cell(Cell::new(person, tense))
    }

    /// Parse a textual key such as `1SG-PSTSimple` or `Infinitive`.
    ///
    /// Person codes contain dashes, so the tense is split off at the last one.
    pub fn parse(code: &str) -> Option<FormKey> {
        if code == Self::INFINITIVE {
            return Some(FormKey::Infinitive);
        }

        let (person, tense) = code.rsplit_once('-')?;
        Some(FormKey::cell(Person::parse(person)?, Tense::parse(tense)?))
    }
}

impl From<Cell> for FormKey {
    #[inline]
    fn from(cell: Cell) -> Self {
        FormKey::Cell(cell)
    }
}

impl fmt::Display for FormKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormKey::Infinitive => Self::INFINITIVE.fmt(f),
            FormKey::Cell(cell) => cell.fmt(f),
        }
    }
}
