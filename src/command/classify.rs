use anyhow::Result;
use clap::Parser;
use ptv::Config;

#[derive(Parser)]
pub(crate) struct ClassifyArgs {
    /// Verbs to classify.
    #[arg(required = true)]
    lemmas: Vec<String>,
}

pub(crate) fn run(args: &ClassifyArgs, config: &Config) -> Result<()> {
    let irregulars = config.irregulars();

    for lemma in &args.lemmas {
        println!("{lemma}: {}", ptv::classify(lemma, &irregulars));
    }

    Ok(())
}
