//! Suffixes of the regular paradigms.
//!
//! Rows are tenses and columns are persons, both in declaration order of
//! [`Tense`] and [`Person`].

use crate::inflection::{Ending, Person, Tense};

type Suffixes = [[&'static str; 8]; 4];

#[rustfmt::skip]
static AR: Suffixes = [
    /* PSTSimple */    ["ei",  "aste",  "ou",  "ou",  "amos",   "astes", "aram", "aram"],
    /* PSTImperfect */ ["ava", "avas",  "ava", "ava", "ávamos", "áveis", "avam", "avam"],
    /* PRSTInd */      ["o",   "as",    "a",   "a",   "amos",   "ais",   "am",   "am"],
    /* PRSTSub */      ["e",   "es",    "e",   "e",   "emos",   "eis",   "em",   "em"],
];

#[rustfmt::skip]
static ER: Suffixes = [
    /* PSTSimple */    ["i",   "este",  "eu",  "eu",  "emos",   "estes", "eram", "eram"],
    /* PSTImperfect */ ["ia",  "ias",   "ia",  "ia",  "íamos",  "íeis",  "iam",  "iam"],
    /* PRSTInd */      ["o",   "es",    "e",   "e",   "emos",   "eis",   "em",   "em"],
    /* PRSTSub */      ["a",   "as",    "a",   "a",   "amos",   "ais",   "am",   "am"],
];

#[rustfmt::skip]
static IR: Suffixes = [
    /* PSTSimple */    ["i",   "iste",  "iu",  "iu",  "imos",   "istes", "iram", "iram"],
    /* PSTImperfect */ ["ia",  "ias",   "ia",  "ia",  "íamos",  "íeis",  "iam",  "iam"],
    /* PRSTInd */      ["o",   "es",    "e",   "e",   "imos",   "is",    "em",   "em"],
    /* PRSTSub */      ["a",   "as",    "a",   "a",   "amos",   "ais",   "am",   "am"],
];

fn suffixes(ending: Ending) -> &'static Suffixes {
    match ending {
        Ending::Ar => &AR,
        Ending::Er => &ER,
        Ending::Ir => &IR,
    }
}

/// Get the suffix for the given paradigm cell.
#[inline]
pub fn suffix(ending: Ending, tense: Tense, person: Person) -> &'static str {
    suffixes(ending)[tense.index()][person.index()]
}

/// Look up a suffix by its literal ending.
///
/// Returns `None` if `ending` is not one of `ar`, `er` or `ir`.
pub fn lookup(ending: &str, tense: Tense, person: Person) -> Option<&'static str> {
    Some(suffix(Ending::parse(ending)?, tense, person))
}

/// Iterate over the suffixes of a tense in person order.
pub fn row(ending: Ending, tense: Tense) -> impl Iterator<Item = (Person, &'static str)> {
    Person::ALL
        .iter()
        .zip(suffixes(ending)[tense.index()])
        .map(|(&person, suffix)| (person, suffix))
}
