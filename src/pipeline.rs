use crate::config::RankConfig;
use crate::corpus::load_corpus;
use crate::error::RankResult;
use crate::frequency::FrequencyTables;
use crate::ranking::{rank, write_ranked, write_score_report};
use crate::scoring::{score_words, WordScore};
use std::path::PathBuf;
use tracing::{debug, info};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub words: usize,
    pub skipped: usize,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Reordered {} words from {} → {}",
            self.words,
            display_path(&self.input).display(),
            display_path(&self.output).display()
        )
    }
}

fn display_path(p: &std::path::Path) -> PathBuf {
    std::path::absolute(p).unwrap_or_else(|_| p.to_path_buf())
}

/// Loads, scores and ranks the corpus without touching the output file.
pub fn rank_words(config: &RankConfig) -> RankResult<(Vec<WordScore>, usize)> {
    let mut corpus = load_corpus(&config.input, config.word_length, config.lowercase)?;
    if config.dedupe {
        corpus.dedupe();
    }

    let tables = FrequencyTables::compute(&corpus.words, config.word_length);
    let mut scores = score_words(&corpus.words, &tables, &config.weights());
    rank(&mut scores);

    if let Some(top) = scores.first() {
        debug!(word = %top.word, score = top.score, "top ranked word");
    }
    Ok((scores, corpus.skipped))
}

/// Runs load → analyze → score → sort → write for one configuration.
pub fn run(config: &RankConfig) -> RankResult<RunSummary> {
    let (scores, skipped) = rank_words(config)?;

    write_ranked(&config.output, &scores)?;
    if let Some(report) = &config.scores {
        write_score_report(report, &scores)?;
    }

    info!(
        words = scores.len(),
        skipped,
        output = %config.output.display(),
        "ranking complete"
    );

    Ok(RunSummary {
        words: scores.len(),
        skipped,
        input: config.input.clone(),
        output: config.output.clone(),
    })
}
