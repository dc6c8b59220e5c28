mod command;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ptv::Config;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Conjugate and classify Portuguese verbs")]
struct Args {
    /// Load configuration from the given path.
    #[arg(long, value_name = "path", default_value = "ptv.toml")]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every regular form of the given verbs.
    Conjugate(command::conjugate::ConjugateArgs),
    /// Find which form of a verb a token is.
    Match(command::matching::MatchArgs),
    /// Classify verbs as regular, irregular or unknown.
    Classify(command::classify::ClassifyArgs),
    /// Explain the verbs in tagged sentences.
    Analyze(command::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .try_init()?;

    let args = Args::try_parse()?;
    let config = Config::load(&args.config)?;

    match &args.command {
        Command::Conjugate(a) => command::conjugate::run(a, &config),
        Command::Match(a) => command::matching::run(a, &config),
        Command::Classify(a) => command::classify::run(a, &config),
        Command::Analyze(a) => command::analyze::run(a, &config),
    }
}
