use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ptv::analyze::Source;
use ptv::tagger::ConlluTagger;
use ptv::{Analyzer, Config};

#[derive(Parser)]
pub(crate) struct AnalyzeArgs {
    /// Tagged sentences in the CoNLL-U format, optionally gzip compressed.
    #[arg(long, value_name = "path")]
    conllu: PathBuf,
    /// Sentences to analyze. They must be present in the tagged sentences.
    #[arg(required = true)]
    sentences: Vec<String>,
}

pub(crate) fn run(args: &AnalyzeArgs, config: &Config) -> Result<()> {
    let tagger = ConlluTagger::open(&args.conllu)?;
    let analyzer = Analyzer::new(config.irregulars(), config.labels());

    for sentence in &args.sentences {
        let verbs = analyzer
            .analyze(&tagger, sentence)
            .with_context(|| format!("Analyzing `{sentence}`"))?;

        println!("# {sentence}");

        if verbs.is_empty() {
            println!("  No verbs found in the sentence.");
            continue;
        }

        for verb in verbs {
            println!("  {} (lemma: {}, {})", verb.text, verb.lemma, verb.class);

            let source = match verb.source {
                Source::Tagger => "tagger",
                Source::Paradigm => "regular paradigm",
                Source::None => "none",
            };

            match &verb.conjugation {
                Some(conjugation) => println!("    {conjugation} ({source})"),
                None => println!("    (none)"),
            }
        }
    }

    Ok(())
}
