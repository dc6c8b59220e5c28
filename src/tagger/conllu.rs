use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::ErrorKind;
use crate::tagger::{Pos, Tagger, Token};
use crate::Error;

/// Number of columns in a CoNLL-U token line.
const COLUMNS: usize = 10;

/// A tagger serving analyses stored in the CoNLL-U format.
///
/// Sentences are identified by their `# text = ...` comment, or by their
/// space-separated tokens if the comment is missing.
#[derive(Default)]
pub struct ConlluTagger {
    sentences: HashMap<Box<str>, Vec<Token>>,
}

impl ConlluTagger {
    /// Open tagged sentences from the given path. Files ending in `.gz` are
    /// decompressed.
    pub fn open(path: &Path) -> Result<Self, Error> {
        let unavailable = |error: io::Error| {
            Error::new(ErrorKind::OracleUnavailable {
                path: path.into(),
                error,
            })
        };

        let mut file = File::open(path).map_err(unavailable)?;
        let mut string = String::new();

        if path.extension() == Some("gz".as_ref()) {
            GzDecoder::new(file)
                .read_to_string(&mut string)
                .map_err(unavailable)?;
        } else {
            file.read_to_string(&mut string).map_err(unavailable)?;
        }

        let this = Self::parse(&string);
        tracing::info!(path = %path.display(), sentences = this.len(), "Loaded tagged sentences");
        Ok(this)
    }

    /// Parse tagged sentences.
    ///
    /// Malformed token lines are skipped with a warning.
    pub fn parse(input: &str) -> Self {
        let mut this = Self::default();
        let mut text = None;
        let mut tokens = Vec::new();

        for (n, line) in input.lines().enumerate() {
            let line = line.trim_end_matches('\r');

            if line.trim().is_empty() {
                this.flush(text.take(), &mut tokens);
                continue;
            }

            if let Some(comment) = line.strip_prefix('#') {
                if let Some((key, value)) = comment.split_once('=') {
                    if key.trim() == "text" {
                        text = Some(value.trim().to_owned());
                    }
                }

                continue;
            }

            match parse_token(line) {
                Some(Some(token)) => tokens.push(token),
                Some(None) => {}
                None => tracing::warn!(number = n + 1, "Malformed token line: {line}"),
            }
        }

        this.flush(text, &mut tokens);
        this
    }

    /// Number of sentences known to the tagger.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    fn flush(&mut self, text: Option<String>, tokens: &mut Vec<Token>) {
        if tokens.is_empty() {
            return;
        }

        let tokens = std::mem::take(tokens);

        let text = match text {
            Some(text) => text,
            None => tokens
                .iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        };

        self.sentences.insert(text.into(), tokens);
    }
}

impl Tagger for ConlluTagger {
    fn tag(&self, sentence: &str) -> Result<Vec<Token>, Error> {
        let sentence = sentence.trim();

        match self.sentences.get(sentence) {
            Some(tokens) => Ok(tokens.clone()),
            None => Err(Error::new(ErrorKind::UnknownSentence(sentence.into()))),
        }
    }
}

/// Parse a single token line.
///
/// Returns `Some(None)` for lines which are valid but don't describe a
/// syntactic word, such as multiword token ranges and empty nodes.
fn parse_token(line: &str) -> Option<Option<Token>> {
    let columns = line.split('\t').collect::<Vec<_>>();

    let [id, form, lemma, upos, _, feats, ..] = columns[..] else {
        return None;
    };

    if columns.len() != COLUMNS {
        return None;
    }

    if id.contains(['-', '.']) {
        return Some(None);
    }

    let mut features = BTreeMap::<String, Vec<String>>::new();

    if feats != "_" {
        for feature in feats.split('|') {
            let (name, values) = feature.split_once('=')?;

            features
                .entry(name.to_owned())
                .or_default()
                .extend(values.split(',').map(str::to_owned));
        }
    }

    Some(Some(Token {
        text: form.to_owned(),
        lemma: lemma.to_owned(),
        pos: Pos::parse(upos),
        features,
    }))
}
