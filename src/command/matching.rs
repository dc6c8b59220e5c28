use anyhow::Result;
use clap::Parser;
use ptv::{Config, Matcher};

#[derive(Parser)]
pub(crate) struct MatchArgs {
    /// The token to look up, such as `falei`.
    token: String,
    /// The infinitive of the verb, such as `falar`.
    lemma: String,
    /// List every matching form instead of only the first.
    #[arg(long)]
    all: bool,
}

pub(crate) fn run(args: &MatchArgs, config: &Config) -> Result<()> {
    let matcher = Matcher::new(config.labels());

    let keys = if args.all {
        matcher.find_all(&args.token, &args.lemma)
    } else {
        matcher.find(&args.token, &args.lemma).into_iter().collect()
    };

    if keys.is_empty() {
        println!("no match");
        return Ok(());
    }

    for key in keys {
        println!("{}", matcher.labels().format(key));
    }

    Ok(())
}
