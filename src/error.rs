use std::io;
use std::path::Path;

/// Errors raised when consulting the morphological tagger.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Test if the tagger could not be loaded at all.
    ///
    /// This must never be treated as a sentence without verbs.
    pub fn is_oracle_unavailable(&self) -> bool {
        matches!(self.kind, ErrorKind::OracleUnavailable { .. })
    }

    /// Test if the tagger is available but has no analysis for a sentence.
    pub fn is_unknown_sentence(&self) -> bool {
        matches!(self.kind, ErrorKind::UnknownSentence(..))
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum ErrorKind {
    #[error("Morphological tagger unavailable: {}", path.display())]
    OracleUnavailable {
        path: Box<Path>,
        #[source]
        error: io::Error,
    },
    #[error("Tagger has no analysis for sentence `{0}`")]
    UnknownSentence(Box<str>),
}
