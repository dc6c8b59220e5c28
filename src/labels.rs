//! Human-readable labels for paradigm cells.

use fixed_map::Map;

use crate::inflection::{FormKey, Person, Tense};

/// Label dictionaries used to describe forms.
///
/// Labels which are not overridden fall back to the built-in English labels.
#[derive(Default)]
pub struct Labels {
    persons: Map<Person, String>,
    tenses: Map<Tense, String>,
}

impl Labels {
    /// Construct labels without any overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the label of a person.
    pub fn set_person(&mut self, person: Person, label: impl Into<String>) {
        self.persons.insert(person, label.into());
    }

    /// Override the label of a tense.
    pub fn set_tense(&mut self, tense: Tense, label: impl Into<String>) {
        self.tenses.insert(tense, label.into());
    }

    /// Label of a person.
    pub fn person(&self, person: Person) -> &str {
        match self.persons.get(person) {
            Some(label) => label.as_str(),
            None => person.label(),
        }
    }

    /// Label of a tense.
    pub fn tense(&self, tense: Tense) -> &str {
        match self.tenses.get(tense) {
            Some(label) => label.as_str(),
            None => tense.label(),
        }
    }

    /// Format the label of a form, such as `First Person Singular Past-Tense
    /// Simple`.
    pub fn format(&self, key: FormKey) -> String {
        match key {
            FormKey::Infinitive => String::from("Infinitive"),
            FormKey::Cell(cell) => {
                format!("{} {}", self.person(cell.person), self.tense(cell.tense))
            }
        }
    }

    /// Describe a textual key such as `2SG-Inf-PRSTInd`.
    ///
    /// Codes which aren't known are echoed back verbatim in place of their
    /// label.
    pub fn describe(&self, code: &str) -> String {
        if let Some(key) = FormKey::parse(code) {
            return self.format(key);
        }

        let Some((person, tense)) = code.rsplit_once('-') else {
            return code.to_owned();
        };

        let person = Person::parse(person).map_or(person, |p| self.person(p));
        let tense = Tense::parse(tense).map_or(tense, |t| self.tense(t));
        format!("{person} {tense}")
    }
}

/// Format the label of a form using the default labels.
pub fn format_label(key: FormKey) -> String {
    Labels::default().format(key)
}
