use anyhow::Result;
use clap::Parser;
use ptv::{conjugate, Config};

#[derive(Parser)]
pub(crate) struct ConjugateArgs {
    /// Verbs to conjugate, in the infinitive.
    #[arg(required = true)]
    lemmas: Vec<String>,
}

pub(crate) fn run(args: &ConjugateArgs, config: &Config) -> Result<()> {
    let labels = config.labels();
    let irregulars = config.irregulars();

    for (i, lemma) in args.lemmas.iter().enumerate() {
        if i > 0 {
            println!();
        }

        let class = ptv::classify(lemma, &irregulars);
        println!("# {lemma} ({class})");

        if !class.is_regular() {
            tracing::warn!("{lemma} is {class}, regular forms may be wrong");
        }

        for (key, form) in conjugate(lemma).iter() {
            println!("  {}: {form}", labels.format(key));
        }
    }

    Ok(())
}
