//! Generation of the regular forms of a verb.

use std::iter;

use fixed_map::Map;

use crate::concat::Concat;
use crate::inflection::{table, Cell, Ending, FormKey, Person, Tense};

/// Every regular form of a verb with a recognized ending.
pub struct Paradigm<'a> {
    infinitive: &'a str,
    stem: &'a str,
    ending: Ending,
    forms: Map<Tense, Map<Person, Concat<'a, 2>>>,
}

impl<'a> Paradigm<'a> {
    fn new(infinitive: &'a str, stem: &'a str, ending: Ending) -> Self {
        let mut forms = Map::new();

        for &tense in Tense::ALL {
            let mut persons = Map::new();

            for (person, suffix) in table::row(ending, tense) {
                persons.insert(person, Concat::new([stem, suffix]));
            }

            forms.insert(tense, persons);
        }

        Self {
            infinitive,
            stem,
            ending,
            forms,
        }
    }

    /// The infinitive this paradigm was generated from.
    #[inline]
    pub fn infinitive(&self) -> &'a str {
        self.infinitive
    }

    /// The stem, which is the infinitive without its ending.
    #[inline]
    pub fn stem(&self) -> &'a str {
        self.stem
    }

    #[inline]
    pub fn ending(&self) -> Ending {
        self.ending
    }

    /// Get the form of a single cell.
    pub fn get(&self, cell: Cell) -> Option<&Concat<'a, 2>> {
        self.forms.get(cell.tense)?.get(cell.person)
    }

    /// Iterate over all inflected forms in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &Concat<'a, 2>)> + '_ {
        self.forms.iter().flat_map(|(tense, persons)| {
            persons
                .iter()
                .map(move |(person, form)| (Cell::new(person, tense), form))
        })
    }

    /// Number of inflected forms.
    pub fn len(&self) -> usize {
        self.forms.iter().map(|(_, persons)| persons.len()).sum()
    }

    /// Test if the paradigm has no inflected forms.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The outcome of conjugating a lemma.
pub enum Conjugations<'a> {
    /// The lemma ends in a regular ending and has been fully conjugated.
    Recognized(Paradigm<'a>),
    /// The ending is not recognized, only the infinitive is known.
    Unrecognized { infinitive: &'a str },
}

impl<'a> Conjugations<'a> {
    /// The infinitive, which is always present.
    pub fn infinitive(&self) -> &'a str {
        match self {
            Conjugations::Recognized(paradigm) => paradigm.infinitive,
            Conjugations::Unrecognized { infinitive } => *infinitive,
        }
    }

    /// Access the paradigm if the ending was recognized.
    pub fn paradigm(&self) -> Option<&Paradigm<'a>> {
        match self {
            Conjugations::Recognized(paradigm) => Some(paradigm),
            Conjugations::Unrecognized { .. } => None,
        }
    }

    #[inline]
    pub fn is_recognized(&self) -> bool {
        matches!(self, Conjugations::Recognized(..))
    }

    /// Total number of forms, including the infinitive.
    pub fn len(&self) -> usize {
        1 + self.paradigm().map_or(0, Paradigm::len)
    }

    /// Always false, since the infinitive is always present.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Get a form by key.
    pub fn get(&self, key: FormKey) -> Option<Concat<'a, 2>> {
        match key {
            FormKey::Infinitive => Some(Concat::new([self.infinitive()])),
            FormKey::Cell(cell) => self.paradigm()?.get(cell).cloned(),
        }
    }

    /// Iterate over all forms.
    ///
    /// The infinitive comes first, followed by each tense in table order with
    /// its persons in table order.
    pub fn iter(&self) -> impl Iterator<Item = (FormKey, Concat<'a, 2>)> + '_ {
        let infinitive = iter::once((FormKey::Infinitive, Concat::new([self.infinitive()])));

        let cells = self
            .paradigm()
            .into_iter()
            .flat_map(|paradigm| paradigm.iter())
            .map(|(cell, form)| (FormKey::Cell(cell), form.clone()));

        infinitive.chain(cells)
    }
}

/// Conjugate the given lemma using the regular paradigm of its ending.
///
/// This never fails. Lemmas whose last two characters aren't `ar`, `er` or
/// `ir` produce [`Conjugations::Unrecognized`].
pub fn conjugate(lemma: &str) -> Conjugations<'_> {
    let Some((stem, ending)) = Ending::from_lemma(lemma) else {
        tracing::debug!(lemma, "No regular ending");
        return Conjugations::Unrecognized { infinitive: lemma };
    };

    if stem.is_empty() {
        tracing::debug!(lemma, "Conjugating lemma with an empty stem");
    }

    Conjugations::Recognized(Paradigm::new(lemma, stem, ending))
}
