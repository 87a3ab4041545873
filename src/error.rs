use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures of a ranking run. None of them are retried.
#[derive(Error, Debug)]
pub enum RankError {
    #[error("no input: cannot read {path}: {source}")]
    InputAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no input: no words of length {length} found in {path}")]
    EmptyCorpus { length: usize, path: PathBuf },

    #[error("cannot write {path}: {source}")]
    OutputAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type RankResult<T> = Result<T, RankError>;

impl RankError {
    pub(crate) fn output(path: impl Into<PathBuf>, source: impl Into<std::io::Error>) -> Self {
        RankError::OutputAccess {
            path: path.into(),
            source: source.into(),
        }
    }
}
