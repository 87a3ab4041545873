use anyhow::Result;
use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wordrank::{ConfigStore, FileConfigStore, RankConfig};

/// reorder a word list by letter and position frequency
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Ranks a word list for wordle-style solvers. Words are scored by how common their letters are across the list and in each position, with likely plurals pushed down."
)]
pub struct Cli {
    /// input word list, one word per line [default: wordlist.txt]
    #[clap(long = "in", value_name = "PATH")]
    input: Option<PathBuf>,

    /// output path for the reordered list [default: wordlist_ranked.txt]
    #[clap(long = "out", value_name = "PATH")]
    output: Option<PathBuf>,

    /// word length to analyze [default: 5]
    #[clap(long = "len", value_parser = clap::value_parser!(u64).range(1..))]
    word_length: Option<u64>,

    /// weight multiplier for the global letter frequency component [default: 1.0]
    #[clap(long, allow_negative_numbers = true)]
    letter_weight: Option<f64>,

    /// weight multiplier for the per-position frequency component [default: 1.0]
    #[clap(long, allow_negative_numbers = true)]
    position_weight: Option<f64>,

    /// [deprecated] extra bonus per unique letter, prefer tuning letter-weight [default: 0.0]
    #[clap(long, allow_negative_numbers = true)]
    unique_weight: Option<f64>,

    /// penalty applied if a word is likely a simple plural, 0 disables [default: 0.75]
    #[clap(long, allow_negative_numbers = true)]
    plural_penalty: Option<f64>,

    /// remove duplicate words before scoring [default: true]
    #[clap(long, value_name = "BOOL")]
    dedupe: Option<bool>,

    /// normalize words to lowercase [default: true]
    #[clap(long = "lower", value_name = "BOOL")]
    lowercase: Option<bool>,

    /// also write a csv of rank, word, score and plural flag
    #[clap(long, value_name = "PATH")]
    scores: Option<PathBuf>,

    /// json file with settings; flags given on the command line win
    #[clap(short = 'c', long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// save the effective settings as json before running
    #[clap(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
}

impl Cli {
    /// Applies command-line overrides on top of `cfg`.
    fn apply_to(&self, mut cfg: RankConfig) -> RankConfig {
        if let Some(input) = &self.input {
            cfg.input = input.clone();
        }
        if let Some(output) = &self.output {
            cfg.output = output.clone();
        }
        if let Some(len) = self.word_length {
            cfg.word_length = len as usize;
        }
        if let Some(w) = self.letter_weight {
            cfg.letter_weight = w;
        }
        if let Some(w) = self.position_weight {
            cfg.position_weight = w;
        }
        if let Some(w) = self.unique_weight {
            cfg.unique_weight = w;
        }
        if let Some(p) = self.plural_penalty {
            cfg.plural_penalty = p;
        }
        if let Some(dedupe) = self.dedupe {
            cfg.dedupe = dedupe;
        }
        if let Some(lower) = self.lowercase {
            cfg.lowercase = lower;
        }
        if let Some(scores) = &self.scores {
            cfg.scores = Some(scores.clone());
        }
        cfg
    }

    fn to_rank_config(&self) -> Result<RankConfig> {
        let base = match &self.config {
            Some(path) => FileConfigStore::with_path(path).load()?,
            None => RankConfig::default(),
        };
        Ok(self.apply_to(base))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let config = cli.to_rank_config()?;

    if let Err(msg) = config.validate() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::ValueValidation, msg).exit();
    }

    if let Some(path) = &cli.write_config {
        FileConfigStore::with_path(path).save(&config)?;
    }

    let summary = wordrank::run(&config)?;
    println!("{summary}");

    Ok(())
}
