use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::classify::Irregulars;
use crate::inflection::{Person, Tense};
use crate::labels::Labels;

/// A configuration used for the application.
///
/// ```toml
/// irregulars = ["ser", "estar", "haver"]
///
/// [persons]
/// "1SG" = "eu"
///
/// [tenses]
/// PSTSimple = "pretérito perfeito"
/// ```
#[derive(Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Replaces the default list of irregular verbs.
    pub irregulars: Option<Vec<String>>,
    /// Label overrides by person code.
    pub persons: BTreeMap<String, String>,
    /// Label overrides by tense code.
    pub tenses: BTreeMap<String, String>,
}

impl Config {
    /// Load configuration from the given path, or use the default if it
    /// doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("Reading {}", path.display()))?;
            Self::parse(&data).with_context(|| format!("Parsing {}", path.display()))?
        } else {
            tracing::debug!(path = %path.display(), "No configuration, using defaults");
            Self::default()
        };

        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }

    /// The irregular verbs to use.
    pub fn irregulars(&self) -> Irregulars {
        match &self.irregulars {
            Some(verbs) => Irregulars::new(verbs),
            None => Irregulars::default(),
        }
    }

    /// Labels with the configured overrides applied.
    ///
    /// Overrides for unknown codes are ignored.
    pub fn labels(&self) -> Labels {
        let mut labels = Labels::new();

        for (code, label) in &self.persons {
            match Person::parse(code) {
                Some(person) => labels.set_person(person, label.as_str()),
                None => tracing::warn!("Ignoring label for unknown person `{code}`"),
            }
        }

        for (code, label) in &self.tenses {
            match Tense::parse(code) {
                Some(tense) => labels.set_tense(tense, label.as_str()),
                None => tracing::warn!("Ignoring label for unknown tense `{code}`"),
            }
        }

        labels
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::classify::{classify, VerbClass};
    use crate::inflection::{FormKey, Person, Tense};

    #[test]
    fn defaults() {
        let config = Config::parse("").expect("empty config");
        assert_eq!(config.irregulars().len(), 13);
        assert_eq!(
            config
                .labels()
                .format(FormKey::cell(Person::FirstSingular, Tense::PastSimple)),
            "First Person Singular Past-Tense Simple"
        );
    }

    #[test]
    fn overrides() {
        let config = Config::parse(
            r#"
            irregulars = ["haver"]

            [persons]
            "1SG" = "eu"
            "9XX" = "ignored"

            [tenses]
            PSTSimple = "pretérito perfeito"
            "#,
        )
        .expect("valid config");

        let irregulars = config.irregulars();
        assert_eq!(classify("haver", &irregulars), VerbClass::Irregular);
        assert_eq!(classify("ser", &irregulars), VerbClass::Regular);

        assert_eq!(
            config
                .labels()
                .format(FormKey::cell(Person::FirstSingular, Tense::PastSimple)),
            "eu pretérito perfeito"
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(Config::parse("verbs = []").is_err());
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Config::load(&dir.path().join("ptv.toml")).expect("defaults");
        assert!(config.irregulars.is_none());
        assert!(config.persons.is_empty());
    }
}
