//! Match surface forms against the regular conjugations of a lemma.
//!
//! Different cells of a paradigm can produce the same surface form, such as
//! the formal second person and the third person singular. Only the first
//! matching cell in table order is reported by [`Matcher::find`], which says
//! nothing about which cell the speaker intended.

use crate::inflection::{conjugate, FormKey};
use crate::labels::Labels;

/// Matches tokens against generated conjugations.
#[derive(Default)]
pub struct Matcher {
    labels: Labels,
}

impl Matcher {
    /// Construct a matcher which describes matches with the given labels.
    pub fn new(labels: Labels) -> Self {
        Self { labels }
    }

    /// The labels used by this matcher.
    #[inline]
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Find the first form of `lemma` which is exactly equal to `token`.
    pub fn find(&self, token: &str, lemma: &str) -> Option<FormKey> {
        let found = conjugate(lemma)
            .iter()
            .find(|(_, form)| form.is(token))
            .map(|(key, _)| key);

        if found.is_none() {
            tracing::debug!(token, lemma, "No regular form matches");
        }

        found
    }

    /// Find every form of `lemma` which is exactly equal to `token`, in table
    /// order.
    pub fn find_all(&self, token: &str, lemma: &str) -> Vec<FormKey> {
        conjugate(lemma)
            .iter()
            .filter(|(_, form)| form.is(token))
            .map(|(key, _)| key)
            .collect()
    }

    /// Describe the first form of `lemma` matching `token`.
    pub fn describe(&self, token: &str, lemma: &str) -> Option<String> {
        let key = self.find(token, lemma)?;
        Some(self.labels.format(key))
    }
}

/// Describe the first regular form of `lemma` matching `token` using the
/// default labels.
pub fn match_regular(token: &str, lemma: &str) -> Option<String> {
    Matcher::default().describe(token, lemma)
}
